//! Chat panel: displays the transcript, recipe cards, and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use recipe_chat_types::message::{Sender, TranscriptEntry};
use crate::markdown::render_markdown;
use crate::panels::{loader::loader, recipe_card::recipe_card};
use crate::state::UiState;
use crate::theme::*;

const INPUT_HINT: &str = "What would you like to cook? (e.g., 'chicken broccoli')";

/// Render the chat panel. Returns Some(message) when user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Recipe Chat")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy() {
                            WARM
                        } else if state.last_turn_failed {
                            ERROR
                        } else {
                            SUCCESS
                        };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Transcript area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &state.entries {
                            render_entry(ui, entry);
                            ui.add_space(6.0);
                        }

                        if state.is_busy() {
                            loader(ui);
                        }

                        if state.scroll_to_bottom {
                            ui.scroll_to_cursor(Some(Align::BOTTOM));
                            state.scroll_to_bottom = false;
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input_enabled = state.input_enabled();
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text(INPUT_HINT)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(input_enabled, input);

                    let send_enabled = state.can_send();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(
                            RichText::new("Send").color(USER_TEXT),
                        )
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    let enter = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter || send_btn.clicked() {
                        submitted = state.take_input();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_entry(ui: &mut egui::Ui, entry: &TranscriptEntry) {
    match entry.sender {
        Sender::User => {
            ui.with_layout(Layout::top_down(Align::Max), |ui| {
                egui::Frame::default()
                    .fill(USER_BUBBLE)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_max_width(BUBBLE_MAX_WIDTH);
                        ui.label(RichText::new(&entry.text).color(USER_TEXT));
                    });
            });
        }
        Sender::Assistant => {
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                egui::Frame::default()
                    .fill(BG_SURFACE)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_max_width(BUBBLE_MAX_WIDTH * 1.5);
                        ui.label(
                            RichText::new(entry.sender.label())
                                .color(WARM)
                                .strong()
                                .small(),
                        );
                        render_markdown(ui, &entry.text);
                    });

                if entry.has_recipes() {
                    for recipe in &entry.recipes {
                        ui.add_space(6.0);
                        recipe_card(ui, recipe);
                    }
                }
            });
        }
    }
}
