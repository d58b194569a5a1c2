//! Event bus for decoupled communication between the session and the UI.
//!
//! The bus is single-threaded (WASM constraint) and uses interior mutability
//! via RefCell. Events are buffered for the UI to drain on each frame, and
//! subscribers are invoked synchronously inside `emit`.
//!
//! A subscriber may cause further emits (e.g. by starting a follow-up turn).
//! Those are held back until the event being dispatched has reached every
//! subscriber, so the drained queue and every subscriber see one order.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use recipe_chat_types::event::SessionEvent;

type Subscriber = Box<dyn Fn(&SessionEvent)>;

/// Shared event bus: clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<SessionEvent>>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
    /// Events emitted but not yet dispatched
    outbox: Rc<RefCell<VecDeque<SessionEvent>>>,
    dispatching: Rc<Cell<bool>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            outbox: Rc::new(RefCell::new(VecDeque::new())),
            dispatching: Rc::new(Cell::new(false)),
        }
    }

    /// Publish an event. Called by the session controller.
    ///
    /// Subscribers run before this returns, unless it is called from inside
    /// a subscriber: then the event is dispatched after the current batch.
    /// Subscribers must not call [`EventBus::subscribe`] on the same bus.
    pub fn emit(&self, event: SessionEvent) {
        self.emit_all([event]);
    }

    /// Publish events that describe one state change. Emits made by
    /// subscribers while the batch is dispatched follow the whole batch.
    pub fn emit_all(&self, events: impl IntoIterator<Item = SessionEvent>) {
        self.outbox.borrow_mut().extend(events);
        if self.dispatching.replace(true) {
            return;
        }
        loop {
            let next = self.outbox.borrow_mut().pop_front();
            let Some(event) = next else { break };
            self.queue.borrow_mut().push_back(event.clone());
            for subscriber in self.subscribers.borrow().iter() {
                subscriber(&event);
            }
        }
        self.dispatching.set(false);
    }

    /// Register a callback invoked synchronously for every future event.
    pub fn subscribe(&self, subscriber: impl Fn(&SessionEvent) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<SessionEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Check if there are pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
