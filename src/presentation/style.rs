use crate::domain::entities::DisplayPreference;
use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

pub const CARD_WIDTH: f32 = 300.0;

pub fn configure_style(ctx: &Context, preference: DisplayPreference) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = [
        (TextStyle::Small, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.window_margin = egui::Margin::same(12.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.interact_size = egui::vec2(60.0, 28.0);

    ctx.set_style(style);
    apply_display_preference(ctx, preference);
}

/// The "dark-mode" style flag: swaps the visuals without touching layout.
pub fn apply_display_preference(ctx: &Context, preference: DisplayPreference) {
    let mut visuals = if preference.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.widgets.noninteractive.rounding = Rounding::same(8.0);
    visuals.widgets.inactive.rounding = Rounding::same(8.0);
    visuals.widgets.hovered.rounding = Rounding::same(8.0);
    visuals.widgets.active.rounding = Rounding::same(8.0);
    visuals.window_rounding = Rounding::same(12.0);

    if visuals.dark_mode {
        visuals.window_fill = Color32::from_gray(20);
        visuals.panel_fill = Color32::from_gray(28);
        visuals.faint_bg_color = Color32::from_gray(36);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_gray(45);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_gray(60));
        visuals.widgets.hovered.weak_bg_fill = Color32::from_gray(60);
        visuals.selection.bg_fill = Color32::from_rgb(0, 122, 255);
        visuals.hyperlink_color = Color32::from_rgb(58, 150, 255);
    } else {
        visuals.window_fill = Color32::WHITE;
        visuals.panel_fill = Color32::from_gray(242);
        visuals.faint_bg_color = Color32::WHITE;
        visuals.widgets.inactive.weak_bg_fill = Color32::from_gray(230);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_gray(200));
        visuals.selection.bg_fill = Color32::from_rgb(0, 122, 255);
    }

    ctx.set_visuals(visuals);
}
