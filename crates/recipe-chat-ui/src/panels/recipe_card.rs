//! Recipe card: one structured recipe under an assistant reply.

use egui::{self, RichText};
use recipe_chat_types::recipe::Recipe;
use crate::theme::*;

/// Cards list at most this many ingredients
pub const MAX_INGREDIENTS: usize = 10;
/// Cards list at most this many steps
pub const MAX_STEPS: usize = 5;
const IMAGE_MAX_HEIGHT: f32 = 180.0;

/// Image shown at the top of the card. The image loaders installed by the
/// app fetch and decode it.
pub fn image_uri(recipe: &Recipe) -> Option<&str> {
    recipe.image.as_deref().map(str::trim).filter(|uri| !uri.is_empty())
}

/// One-line facts under the title, e.g. "35 min · serves 4"
pub fn meta_line(recipe: &Recipe) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(minutes) = recipe.ready_in_minutes {
        parts.push(format!("{} min", minutes));
    }
    if let Some(servings) = recipe.servings {
        parts.push(format!("serves {}", servings));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

fn nutrition_tint(label: &str) -> egui::Color32 {
    match label {
        "Calories" => NUTRITION_TINTS[0],
        "Protein" => NUTRITION_TINTS[1],
        "Carbs" => NUTRITION_TINTS[2],
        _ => NUTRITION_TINTS[3],
    }
}

pub fn recipe_card(ui: &mut egui::Ui, recipe: &Recipe) {
    egui::Frame::default()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(1.0, BG_SURFACE))
        .corner_radius(CARD_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            if let Some(uri) = image_uri(recipe) {
                ui.add(
                    egui::Image::new(uri)
                        .max_width(ui.available_width())
                        .max_height(IMAGE_MAX_HEIGHT)
                        .corner_radius(CARD_ROUNDING),
                );
                ui.add_space(4.0);
            }

            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(&recipe.title).color(TEXT_PRIMARY).strong().size(16.0));
                if let Some(url) = &recipe.source_url {
                    ui.hyperlink_to(RichText::new("↗ source").small(), url);
                }
            });

            if let Some(meta) = meta_line(recipe) {
                ui.label(RichText::new(meta).color(TEXT_SECONDARY).small());
            }

            if let Some(summary) = recipe.summary.as_deref().filter(|s| !s.is_empty()) {
                ui.label(RichText::new(summary).color(TEXT_SECONDARY));
            }

            if let Some(nutrition) = recipe.nutrition.as_ref().filter(|n| !n.is_empty()) {
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for (label, value) in nutrition.facts() {
                        egui::Frame::default()
                            .fill(nutrition_tint(label))
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(label).strong().small());
                                    ui.label(RichText::new(value).color(TEXT_PRIMARY));
                                });
                            });
                    }
                });
            }

            if !recipe.ingredients.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new("Ingredients:").color(TEXT_PRIMARY).strong());
                for ingredient in recipe.ingredients.iter().take(MAX_INGREDIENTS) {
                    ui.label(RichText::new(format!("• {}", ingredient)).color(TEXT_SECONDARY));
                }
            }

            if !recipe.steps.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new("Steps:").color(TEXT_PRIMARY).strong());
                for (i, step) in recipe.steps.iter().take(MAX_STEPS).enumerate() {
                    ui.label(RichText::new(format!("{}. {}", i + 1, step)).color(TEXT_SECONDARY));
                }
            }

            if !recipe.similar.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new("Similar Recipes:").color(TEXT_PRIMARY).strong());
                ui.horizontal_wrapped(|ui| {
                    for similar in &recipe.similar {
                        match similar.url() {
                            Some(url) => {
                                ui.hyperlink_to(RichText::new(&similar.title).small(), url);
                            }
                            None => {
                                ui.label(RichText::new(&similar.title).small());
                            }
                        }
                    }
                });
            }
        });
}
