//! UI-level state that drives rendering.
//! This is a read-only mirror of the conversation session,
//! updated each frame by draining the EventBus.

use recipe_chat_types::{event::SessionEvent, message::TranscriptEntry};

/// State visible to UI panels
pub struct UiState {
    /// Mirrored transcript, in session order
    pub entries: Vec<TranscriptEntry>,
    /// Mirrored busy flag
    pub busy: bool,
    /// True until the history bootstrap reports back
    pub loading_history: bool,
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
    /// Set on every append; the chat panel scrolls and clears it
    pub scroll_to_bottom: bool,
    /// Whether the most recent turn settled as a failure
    pub last_turn_failed: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            busy: false,
            loading_history: true,
            input_text: String::new(),
            status_text: "Loading history...".to_string(),
            scroll_to_bottom: false,
            last_turn_failed: false,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::HistoryLoaded { exchanges } => {
                    self.loading_history = false;
                    self.status_text = if exchanges == 0 {
                        "Ready".to_string()
                    } else {
                        format!("Restored {} earlier exchanges", exchanges)
                    };
                }
                SessionEvent::EntryAppended { index, entry } => {
                    if index == self.entries.len() {
                        self.entries.push(entry);
                        self.scroll_to_bottom = true;
                    } else {
                        log::warn!(
                            "Skipping entry {} (mirror holds {})",
                            index,
                            self.entries.len()
                        );
                    }
                }
                SessionEvent::BusyChanged { busy } => {
                    self.busy = busy;
                }
                SessionEvent::TurnStarted { .. } => {
                    self.status_text = "Cooking up ideas...".to_string();
                }
                SessionEvent::TurnSettled { success, .. } => {
                    self.last_turn_failed = !success;
                    self.status_text = if success {
                        "Ready".to_string()
                    } else {
                        "Last request failed".to_string()
                    };
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Input is accepted only once history is in and no turn is outstanding
    pub fn input_enabled(&self) -> bool {
        !self.busy && !self.loading_history
    }

    pub fn can_send(&self) -> bool {
        self.input_enabled() && !self.input_text.trim().is_empty()
    }

    /// Take the trimmed input for submission, clearing the field.
    pub fn take_input(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.input_text.trim().to_string();
        self.input_text.clear();
        Some(text)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
