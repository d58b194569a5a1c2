use serde::{Deserialize, Serialize};
use crate::{ChatError, Result};

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Base URL of the chat service, without trailing slash
    pub api_base: String,
    /// Fixed identity for the whole session
    pub user_id: String,
    /// Enforced by the HTTP transport, never by the session controller
    pub request_timeout_ms: Option<u64>,
    pub fallback: FallbackText,
    pub log_level: LogLevel,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000".to_string(),
            user_id: "anonymous".to_string(),
            request_timeout_ms: Some(60_000),
            fallback: FallbackText::default(),
            log_level: LogLevel::Info,
        }
    }
}

impl ChatConfig {
    /// Parse an override document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ChatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(ChatError::Config("user_id must not be empty".to_string()));
        }
        if self.api_base.trim().is_empty() {
            return Err(ChatError::Config("api_base must not be empty".to_string()));
        }
        Ok(())
    }

    /// `api_base` with any trailing slashes removed
    pub fn base_url(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}

/// User-facing strings substituted when a turn yields nothing to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackText {
    /// Used when the service replies without text
    pub empty_reply: String,
    /// Used when the turn fails for any reason
    pub turn_failed: String,
}

impl Default for FallbackText {
    fn default() -> Self {
        Self {
            empty_reply: "No response received.".to_string(),
            turn_failed: "Sorry, something went wrong while contacting the assistant. Please try again."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
