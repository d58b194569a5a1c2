use serde::{Deserialize, Serialize};

/// One stored exchange from the conversation history endpoint.
/// Extra fields in the payload (row id, user id) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub user_message: String,
    pub bot_response: String,
}

impl ExchangeRecord {
    pub fn new(user_message: impl Into<String>, bot_response: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            bot_response: bot_response.into(),
        }
    }
}
