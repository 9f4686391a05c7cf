//! Small shared widgets for the pane.

use eframe::egui::{self, Color32};

use super::colors::{name_color, PaneTheme};

/// First letters of up to two words, uppercased.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// Circular avatar with the participant's initials.
pub fn render_avatar(ui: &mut egui::Ui, name: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();

    // Subtle shadow for depth
    painter.circle_filled(
        rect.center() + egui::vec2(0.0, 1.5),
        size / 2.0,
        Color32::from_black_alpha(30),
    );
    painter.circle_filled(rect.center(), size / 2.0, name_color(name));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials(name),
        egui::FontId::new(size * 0.4, egui::FontFamily::Proportional),
        Color32::WHITE,
    );

    response
}

/// Uppercase section title followed by a thin separator.
pub fn section_header(ui: &mut egui::Ui, title: &str, theme: &PaneTheme) {
    ui.add_space(16.0);
    ui.label(
        egui::RichText::new(title)
            .size(11.0)
            .strong()
            .color(theme.text_muted),
    );
    ui.add_space(6.0);

    let sep_rect = egui::Rect::from_min_size(ui.cursor().min, egui::vec2(ui.available_width(), 1.0));
    ui.painter().rect_filled(sep_rect, 0.0, theme.border_medium);
    ui.add_space(8.0);
}
