//! Configuration supplied by the host page.

use recipe_chat_types::{
    ChatError,
    config::{ChatConfig, LogLevel},
};

/// Id of the optional `<script type="application/json">` override element
pub const CONFIG_ELEMENT_ID: &str = "recipe-chat-config";

/// Read the override element, if any, and resolve the effective config.
///
/// Runs before the logger is installed, so the error is handed back for
/// the caller to log.
pub fn load() -> (ChatConfig, Option<ChatError>) {
    let source = gloo_utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    resolve(source.as_deref())
}

/// Absent or blank source means defaults; an invalid one falls back to
/// defaults and reports why.
pub fn resolve(source: Option<&str>) -> (ChatConfig, Option<ChatError>) {
    match source.map(str::trim).filter(|s| !s.is_empty()) {
        None => (ChatConfig::default(), None),
        Some(json) => match ChatConfig::from_json(json) {
            Ok(config) => (config, None),
            Err(e) => (ChatConfig::default(), Some(e)),
        },
    }
}

pub fn log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Error => log::Level::Error,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Info => log::Level::Info,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Trace => log::Level::Trace,
    }
}
