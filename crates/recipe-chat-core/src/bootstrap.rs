//! History bootstrap: flat exchange records into transcript entries.

use recipe_chat_types::{history::ExchangeRecord, message::TranscriptEntry};

/// Expand each stored exchange into a user entry followed by an assistant
/// entry, preserving order. History never carries recipe payloads.
pub fn expand_history(records: &[ExchangeRecord]) -> Vec<TranscriptEntry> {
    records
        .iter()
        .flat_map(|record| {
            [
                TranscriptEntry::user(&record.user_message),
                TranscriptEntry::assistant(&record.bot_response),
            ]
        })
        .collect()
}
