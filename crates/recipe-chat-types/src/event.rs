use serde::{Deserialize, Serialize};
use crate::message::TranscriptEntry;

/// Events emitted by the session controller.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// History bootstrap finished; `exchanges` pairs were expanded
    HistoryLoaded { exchanges: usize },

    /// An entry was appended at `index`
    EntryAppended { index: usize, entry: TranscriptEntry },

    /// The busy flag flipped
    BusyChanged { busy: bool },

    /// A turn's transport call is about to be issued
    TurnStarted { turn_id: u64 },

    /// A turn settled, successfully or with the fallback entry
    TurnSettled { turn_id: u64, success: bool },
}
