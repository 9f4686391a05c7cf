use std::collections::BTreeMap;

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};

/// Text hierarchy, including the pane's section header style.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name("section_header".into()), FontId::new(11.0, Proportional)),
        (TextStyle::Name("participant_name".into()), FontId::new(13.0, Proportional)),
    ]
    .into()
}

/// Apply spacing, button and input styling once at startup.
pub fn apply_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();

    // 8px grid
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(55, 60, 70);
    style.visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(55, 60, 70);
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(70, 76, 88);
    style.visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(70, 76, 88);
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);

    style.visuals.widgets.active.bg_fill = Color32::from_rgb(88, 101, 242);
    style.visuals.widgets.active.weak_bg_fill = Color32::from_rgb(88, 101, 242);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);

    style.visuals.extreme_bg_color = Color32::from_rgb(30, 32, 38);
    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(88, 101, 242, 100);

    ctx.set_style(style);
}
