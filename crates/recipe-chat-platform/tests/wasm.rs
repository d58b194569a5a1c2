//! WASM-target tests for recipe-chat-platform (Node.js runtime).
//!
//! Exercises payload decoding and URL building under wasm32-unknown-unknown
//! via `wasm-pack test --node`. Live fetch calls need a running service and
//! are not covered here.

use wasm_bindgen_test::*;

use recipe_chat_core::ports::ChatTransportPort;
use recipe_chat_platform::http::payload::{decode_chat_reply, decode_history};
use recipe_chat_platform::HttpBackend;
use recipe_chat_types::config::ChatConfig;

#[wasm_bindgen_test]
fn http_backend_name() {
    let backend = HttpBackend::new(&ChatConfig::default());
    assert_eq!(backend.transport_name(), "http");
}

#[wasm_bindgen_test]
fn http_backend_default_urls() {
    let backend = HttpBackend::new(&ChatConfig::default());
    assert_eq!(backend.chat_url(), "http://localhost:8000/chat");
    assert_eq!(
        backend.history_url("anonymous"),
        "http://localhost:8000/conversations/anonymous"
    );
}

#[wasm_bindgen_test]
fn http_backend_history_url_encodes_user_id() {
    let mut config = ChatConfig::default();
    config.api_base = "https://chef.example/api/".to_string();
    let backend = HttpBackend::new(&config);
    assert_eq!(
        backend.history_url("a b/c"),
        "https://chef.example/api/conversations/a%20b%2Fc"
    );
    assert_eq!(
        backend.history_url("jos\u{e9}"),
        "https://chef.example/api/conversations/jos%C3%A9"
    );
}

#[wasm_bindgen_test]
fn decode_wrapped_reply() {
    let reply = decode_chat_reply(r#"{"response":{"text":"hi","recipes":[]}}"#).unwrap();
    assert_eq!(reply.text.as_deref(), Some("hi"));
    assert!(reply.recipes.unwrap().is_empty());
}

#[wasm_bindgen_test]
fn decode_history_records() {
    let records = decode_history(r#"[{"user_message":"A","bot_response":"B"}]"#).unwrap();
    assert_eq!(records[0].user_message, "A");
}
