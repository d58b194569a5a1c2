//! Busy indicator shown while a turn is outstanding.

use egui::{self, RichText};
use crate::theme::*;

pub const LOADER_TEXT: &str = "Cooking up ideas...";

pub fn loader(ui: &mut egui::Ui) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.add(egui::Spinner::new().size(32.0).color(WARM));
        ui.add_space(6.0);
        ui.label(RichText::new(LOADER_TEXT).color(WARM).italics().strong());
    });
    ui.add_space(12.0);
}
