//! Conversation session controller for the recipe chat client.
//!
//! Pure Rust, single-threaded. Platform adapters plug in through the traits
//! in [`ports`]; the UI observes the session through the [`event_bus`].

pub mod ports;
pub mod event_bus;
pub mod bootstrap;
pub mod turn;
pub mod session;


pub use session::{PendingTurn, SessionController, SubmitRejection, TranscriptView, TurnPhase};
pub use turn::{TurnOutcome, TurnReport};
