//! Holder for the session while the history bootstrap is still running.

use recipe_chat_core::SessionController;

/// Empty until bootstrap completes. Closing an empty slot closes the
/// session as soon as it is filled.
#[derive(Default)]
pub struct SessionSlot {
    session: Option<SessionController>,
    closed: bool,
}

impl SessionSlot {
    pub fn fill(&mut self, session: SessionController) {
        if self.closed {
            log::info!("App closed during bootstrap; closing session");
            session.close();
        }
        self.session = Some(session);
    }

    /// The live session, if bootstrap has finished
    pub fn session(&self) -> Option<SessionController> {
        self.session.clone()
    }

    pub fn close(&mut self) {
        self.closed = true;
        if let Some(session) = &self.session {
            session.close();
        }
    }
}
