//! Wire payload decoding for the chat service.
//!
//! Kept free of any fetch types so it can be tested natively.

use serde_json::Value;
use recipe_chat_types::{
    Result,
    history::ExchangeRecord,
    message::ChatReply,
};

/// Decode a `/chat` body. The service wraps its reply as
/// `{"response": {"text": ..., "recipes": [...]}}` or, for plain answers,
/// `{"response": "..."}`; a bare reply object is accepted too.
pub fn decode_chat_reply(body: &str) -> Result<ChatReply> {
    let value: Value = serde_json::from_str(body)?;
    let reply = match value {
        Value::Object(mut map) => match map.remove("response") {
            Some(Value::String(text)) => return Ok(ChatReply::text(text)),
            Some(inner @ Value::Object(_)) => inner,
            Some(other) => {
                map.insert("response".to_string(), other);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    };
    Ok(serde_json::from_value(reply)?)
}

/// Decode a `/conversations/{user_id}` body
pub fn decode_history(body: &str) -> Result<Vec<ExchangeRecord>> {
    Ok(serde_json::from_str(body)?)
}
