//! Conversation session controller.
//!
//! Owns the transcript and the busy flag. A turn runs in two steps:
//! 1. `begin_turn` appends the user's entry and marks the session busy,
//!    synchronously, before any network work happens
//! 2. `PendingTurn::run` calls the transport and settles the turn by
//!    appending exactly one assistant entry and clearing busy
//!
//! Only one turn may be outstanding at a time. Completions that arrive
//! after the session was closed or dropped are discarded.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use recipe_chat_types::{
    ChatError,
    config::{ChatConfig, FallbackText},
    event::SessionEvent,
    message::TranscriptEntry,
};
use crate::bootstrap::expand_history;
use crate::event_bus::EventBus;
use crate::ports::{ChatRequest, ChatTransportPort, HistoryPort};
use crate::turn::{reconcile, TurnOutcome, TurnReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    Sending { turn_id: u64 },
}

/// Why a submission was not accepted. None of these touch the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Text was empty or whitespace only
    EmptyInput,
    /// Another turn is still outstanding
    Busy { outstanding: u64 },
    /// The session has been closed
    Closed,
}

impl fmt::Display for SubmitRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejection::EmptyInput => write!(f, "empty input"),
            SubmitRejection::Busy { outstanding } => {
                write!(f, "turn {} is still outstanding", outstanding)
            }
            SubmitRejection::Closed => write!(f, "session closed"),
        }
    }
}

/// Read-only snapshot handed to the rendering layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptView {
    pub entries: Vec<TranscriptEntry>,
    pub busy: bool,
}

struct SessionState {
    transcript: Vec<TranscriptEntry>,
    phase: TurnPhase,
    closed: bool,
    turn_counter: u64,
}

/// State shared between the controller and its pending turns.
/// Borrows of `state` never live across an await point.
struct SessionCore {
    user_id: String,
    fallback: FallbackText,
    state: RefCell<SessionState>,
    event_bus: EventBus,
}

impl SessionCore {
    fn append(&self, entry: TranscriptEntry) -> usize {
        let index = {
            let mut state = self.state.borrow_mut();
            state.transcript.push(entry.clone());
            state.transcript.len() - 1
        };
        self.event_bus.emit(SessionEvent::EntryAppended { index, entry });
        index
    }

    fn is_sending(&self, turn_id: u64) -> bool {
        self.state.borrow().phase == TurnPhase::Sending { turn_id }
    }

    /// Apply a turn's outcome: one assistant entry, then back to idle.
    fn settle(&self, turn_id: u64, outcome: TurnOutcome) -> TurnReport {
        {
            let state = self.state.borrow();
            if state.closed {
                log::info!("Turn {} settled after session close; discarded", turn_id);
                return TurnReport::Discarded { turn_id };
            }
            if state.phase != (TurnPhase::Sending { turn_id }) {
                log::warn!("Turn {} is not outstanding; ignoring its outcome", turn_id);
                return TurnReport::Discarded { turn_id };
            }
        }

        let success = outcome.is_success();
        if let TurnOutcome::Failed(ref e) = outcome {
            log::error!("Turn {} failed: {}", turn_id, e);
        }
        let entry = reconcile(outcome, &self.fallback);

        let entry_index = {
            let mut state = self.state.borrow_mut();
            state.transcript.push(entry.clone());
            state.phase = TurnPhase::Idle;
            state.transcript.len() - 1
        };
        self.event_bus.emit_all([
            SessionEvent::EntryAppended { index: entry_index, entry },
            SessionEvent::BusyChanged { busy: false },
            SessionEvent::TurnSettled { turn_id, success },
        ]);

        TurnReport::Settled { turn_id, entry_index, success }
    }
}

/// The session controller. Clone-cheap; clones share one session.
#[derive(Clone)]
pub struct SessionController {
    core: Rc<SessionCore>,
    transport: Rc<dyn ChatTransportPort>,
}

impl SessionController {
    /// Create a session and hydrate it from history before returning.
    ///
    /// A history failure is logged and the session starts empty.
    pub async fn start(
        config: &ChatConfig,
        history: &dyn HistoryPort,
        transport: Rc<dyn ChatTransportPort>,
        event_bus: EventBus,
    ) -> Self {
        let session = Self::empty(config, transport, event_bus);
        session.bootstrap(history).await;
        session
    }

    fn empty(config: &ChatConfig, transport: Rc<dyn ChatTransportPort>, event_bus: EventBus) -> Self {
        let core = SessionCore {
            user_id: config.user_id.clone(),
            fallback: config.fallback.clone(),
            state: RefCell::new(SessionState {
                transcript: Vec::new(),
                phase: TurnPhase::Idle,
                closed: false,
                turn_counter: 0,
            }),
            event_bus,
        };
        Self {
            core: Rc::new(core),
            transport,
        }
    }

    async fn bootstrap(&self, history: &dyn HistoryPort) {
        let user_id = &self.core.user_id;
        match history.load_history(user_id).await {
            Ok(records) => {
                for entry in expand_history(&records) {
                    self.core.append(entry);
                }
                log::info!(
                    "Session started for {} with {} prior exchanges",
                    user_id,
                    records.len()
                );
                self.core
                    .event_bus
                    .emit(SessionEvent::HistoryLoaded { exchanges: records.len() });
            }
            Err(e) => {
                log::warn!("History unavailable for {} ({}); starting empty", user_id, e);
                self.core
                    .event_bus
                    .emit(SessionEvent::HistoryLoaded { exchanges: 0 });
            }
        }
    }

    /// Accept a user turn: append the trimmed text and mark the session busy.
    ///
    /// The returned [`PendingTurn`] must be driven with [`PendingTurn::run`]
    /// to issue the transport call.
    pub fn begin_turn(&self, text: &str) -> Result<PendingTurn, SubmitRejection> {
        let message = text.trim();

        let (turn_id, index) = {
            let mut state = self.core.state.borrow_mut();
            if state.closed {
                return Err(SubmitRejection::Closed);
            }
            if message.is_empty() {
                return Err(SubmitRejection::EmptyInput);
            }
            if let TurnPhase::Sending { turn_id } = state.phase {
                log::debug!("Submission rejected: turn {} outstanding", turn_id);
                return Err(SubmitRejection::Busy { outstanding: turn_id });
            }

            state.turn_counter += 1;
            let turn_id = state.turn_counter;
            state.transcript.push(TranscriptEntry::user(message));
            state.phase = TurnPhase::Sending { turn_id };
            (turn_id, state.transcript.len() - 1)
        };

        self.core.event_bus.emit_all([
            SessionEvent::EntryAppended {
                index,
                entry: TranscriptEntry::user(message),
            },
            SessionEvent::BusyChanged { busy: true },
            SessionEvent::TurnStarted { turn_id },
        ]);

        Ok(PendingTurn {
            core: Rc::downgrade(&self.core),
            transport: self.transport.clone(),
            request: ChatRequest {
                user_id: self.core.user_id.clone(),
                message: message.to_string(),
            },
            turn_id,
            settled: false,
        })
    }

    /// Begin a turn and drive it to settlement.
    pub async fn submit(&self, text: &str) -> Result<TurnReport, SubmitRejection> {
        let pending = self.begin_turn(text)?;
        Ok(pending.run().await)
    }

    /// Tear down the session. Outstanding completions will be discarded.
    pub fn close(&self) {
        let mut state = self.core.state.borrow_mut();
        if !state.closed {
            state.closed = true;
            log::info!("Session for {} closed", self.core.user_id);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.core.state.borrow().closed
    }

    pub fn view(&self) -> TranscriptView {
        let state = self.core.state.borrow();
        TranscriptView {
            entries: state.transcript.clone(),
            busy: state.phase != TurnPhase::Idle,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.core.state.borrow().phase != TurnPhase::Idle
    }

    pub fn phase(&self) -> TurnPhase {
        self.core.state.borrow().phase
    }

    pub fn len(&self) -> usize {
        self.core.state.borrow().transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn user_id(&self) -> &str {
        &self.core.user_id
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.core.event_bus
    }
}

/// A turn whose user entry is already in the transcript.
///
/// Holds only a weak reference to the session, so a dropped session is
/// never written to. Dropping a pending turn before it settles settles it
/// as a failure, so busy can never stay set.
#[must_use = "a pending turn does nothing until `run` is awaited"]
pub struct PendingTurn {
    core: Weak<SessionCore>,
    transport: Rc<dyn ChatTransportPort>,
    request: ChatRequest,
    turn_id: u64,
    settled: bool,
}

impl PendingTurn {
    pub fn turn_id(&self) -> u64 {
        self.turn_id
    }

    pub fn message(&self) -> &str {
        &self.request.message
    }

    /// Call the transport and settle the turn.
    pub async fn run(mut self) -> TurnReport {
        log::debug!(
            "Turn {} sending via {}",
            self.turn_id,
            self.transport.transport_name()
        );
        let outcome = TurnOutcome::from(self.transport.send_message(&self.request).await);
        self.settled = true;

        match self.core.upgrade() {
            Some(core) => core.settle(self.turn_id, outcome),
            None => {
                log::info!("Turn {} settled after session drop; discarded", self.turn_id);
                TurnReport::Discarded { turn_id: self.turn_id }
            }
        }
    }
}

impl Drop for PendingTurn {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Some(core) = self.core.upgrade() {
            if core.is_sending(self.turn_id) {
                core.settle(
                    self.turn_id,
                    TurnOutcome::Failed(ChatError::Other(
                        "turn dropped before settlement".to_string(),
                    )),
                );
            }
        }
    }
}
