//! Turn settlement: one reducer over both outcomes of a transport call.

use recipe_chat_types::{
    ChatError, Result,
    config::FallbackText,
    message::{ChatReply, TranscriptEntry},
};

/// How a turn's transport call ended
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Replied(ChatReply),
    Failed(ChatError),
}

impl TurnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TurnOutcome::Replied(_))
    }
}

impl From<Result<ChatReply>> for TurnOutcome {
    fn from(result: Result<ChatReply>) -> Self {
        match result {
            Ok(reply) => TurnOutcome::Replied(reply),
            Err(e) => TurnOutcome::Failed(e),
        }
    }
}

/// What happened to a turn once it left the `Sending` phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// An assistant entry was appended; `success` is false for the apology entry
    Settled { turn_id: u64, entry_index: usize, success: bool },
    /// The session was closed or dropped first; nothing was appended
    Discarded { turn_id: u64 },
}

impl TurnReport {
    pub fn turn_id(&self) -> u64 {
        match self {
            TurnReport::Settled { turn_id, .. } | TurnReport::Discarded { turn_id } => *turn_id,
        }
    }
}

/// Build the single assistant entry for a settled turn.
///
/// Never yields an entry without visible text, and never exposes the
/// transport error to the user.
pub fn reconcile(outcome: TurnOutcome, fallback: &FallbackText) -> TranscriptEntry {
    match outcome {
        TurnOutcome::Replied(reply) => {
            let text = reply
                .text
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| fallback.empty_reply.clone());
            TranscriptEntry::assistant_with_recipes(text, reply.recipes.unwrap_or_default())
        }
        TurnOutcome::Failed(_) => TranscriptEntry::assistant(fallback.turn_failed.clone()),
    }
}
