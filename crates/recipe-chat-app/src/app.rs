//! Main egui application: owns the session lifecycle and composes the panels.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel};

use recipe_chat_core::event_bus::EventBus;
use recipe_chat_core::ports::ChatTransportPort;
use recipe_chat_core::SessionController;
use recipe_chat_platform::HttpBackend;
use recipe_chat_types::config::ChatConfig;
use recipe_chat_ui::panels::chat;
use recipe_chat_ui::state::UiState;
use recipe_chat_ui::theme;

use crate::session_slot::SessionSlot;

/// The main application state
pub struct RecipeChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    session: Rc<RefCell<SessionSlot>>,
    first_frame: bool,
}

impl RecipeChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ChatConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let event_bus = EventBus::new();

        // Wake the UI whenever the session publishes something
        let ctx = cc.egui_ctx.clone();
        event_bus.subscribe(move |_| ctx.request_repaint());

        let session = Rc::new(RefCell::new(SessionSlot::default()));
        Self::start_session(config, event_bus.clone(), session.clone());

        Self {
            ui_state: UiState::new(),
            event_bus,
            session,
            first_frame: true,
        }
    }

    /// Hydrate the session from history (async), then publish it to the slot.
    fn start_session(
        config: ChatConfig,
        event_bus: EventBus,
        slot: Rc<RefCell<SessionSlot>>,
    ) {
        wasm_bindgen_futures::spawn_local(async move {
            let backend = Rc::new(HttpBackend::new(&config));
            let transport: Rc<dyn ChatTransportPort> = backend.clone();
            let session =
                SessionController::start(&config, backend.as_ref(), transport, event_bus).await;
            slot.borrow_mut().fill(session);
        });
    }

    /// Begin a turn synchronously, then drive the transport call (async)
    fn dispatch_message(&self, text: String) {
        let Some(session) = self.session.borrow().session() else {
            log::debug!("Submission before session start ignored");
            return;
        };

        match session.begin_turn(&text) {
            Ok(pending) => {
                log::debug!(
                    "Turn {} dispatched ({} chars)",
                    pending.turn_id(),
                    pending.message().len()
                );
                wasm_bindgen_futures::spawn_local(async move {
                    let report = pending.run().await;
                    log::debug!("Turn {} finished: {:?}", report.turn_id(), report);
                });
            }
            Err(rejection) => log::debug!("Submission rejected: {}", rejection),
        }
    }
}

impl eframe::App for RecipeChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the session
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // Keep the spinner animating
        if self.ui_state.is_busy() || self.ui_state.loading_history {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| {
            if let Some(text) = chat::chat_panel(ui, &mut self.ui_state) {
                self.dispatch_message(text);
            }
        });
    }
}

impl Drop for RecipeChatApp {
    fn drop(&mut self) {
        self.session.borrow_mut().close();
    }
}
