//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(243, 244, 246);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(249, 250, 251);
pub const BG_SURFACE: Color32 = Color32::from_rgb(229, 231, 235);
pub const BG_CARD: Color32 = Color32::WHITE;
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(31, 41, 55);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(75, 85, 99);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(59, 130, 246);
pub const USER_TEXT: Color32 = Color32::WHITE;
pub const WARM: Color32 = Color32::from_rgb(249, 115, 22);
pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);

/// Nutrition tile tints: calories, protein, carbs, fat
pub const NUTRITION_TINTS: [Color32; 4] = [
    Color32::from_rgb(239, 246, 255),
    Color32::from_rgb(240, 253, 244),
    Color32::from_rgb(254, 252, 232),
    Color32::from_rgb(254, 242, 242),
];

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const CARD_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);
pub const BUBBLE_MAX_WIDTH: f32 = 420.0;

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_CARD;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, USER_TEXT);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    style.visuals.hyperlink_color = ACCENT;

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
