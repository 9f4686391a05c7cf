//! Moderator footer: mute-all button and the more-actions menu.

use crossbeam_channel::Sender;
use eframe::egui;

use crate::pane::{
    CloseReason, FooterLayout, FooterMenuItem, ModerationStatus, PanelShell, PointerHub,
};
use crate::protocol::AppAction;
use crate::ui::theme::PaneTheme;

const MENU_WIDTH: f32 = 285.0;

#[allow(clippy::too_many_arguments)]
pub fn render_footer(
    ui: &mut egui::Ui,
    shell: &mut PanelShell,
    footer: FooterLayout,
    status: ModerationStatus,
    hub: &PointerHub,
    pane_region: egui::Id,
    theme: &PaneTheme,
    action_tx: &Sender<AppAction>,
) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if footer.more_actions {
            render_more_actions(ui, shell, status, hub, pane_region, theme, action_tx);
        }
        if footer.mute_all
            && ui
                .button("Mute all")
                .on_hover_text("Mute everyone else")
                .clicked()
        {
            shell.request_mute_everyone(action_tx);
        }
    });
}

/// Trigger button plus its popup. Both are registered under the shell's
/// anchor so clicks on them never count as outside clicks.
fn render_more_actions(
    ui: &mut egui::Ui,
    shell: &mut PanelShell,
    status: ModerationStatus,
    hub: &PointerHub,
    pane_region: egui::Id,
    theme: &PaneTheme,
    action_tx: &Sender<AppAction>,
) {
    let anchor = shell.anchor();
    let trigger = ui
        .button("•••")
        .on_hover_text("More moderation actions");
    if trigger.clicked() {
        shell.toggle_menu();
    }
    hub.register_region(anchor, Some(pane_region), trigger.rect);
    hub.register_region(anchor.with("trigger"), Some(anchor), trigger.rect);

    if !shell.menu().is_open() {
        return;
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        shell.close_menu(CloseReason::Escape);
        return;
    }

    let mut activated: Option<FooterMenuItem> = None;
    let area = egui::Area::new(anchor.with("menu"))
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::RIGHT_BOTTOM)
        .fixed_pos(trigger.rect.right_top() - egui::vec2(0.0, 6.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::new()
                .fill(theme.surface[4])
                .corner_radius(6.0)
                .stroke(egui::Stroke::new(1.0, theme.border_medium))
                .inner_margin(egui::Margin::symmetric(4, 6))
                .show(ui, |ui| {
                    ui.set_max_width(MENU_WIDTH);
                    for item in FooterMenuItem::ALL {
                        let text = match item.checked(status) {
                            Some(true) => format!("☑ {}", item.label()),
                            Some(false) => format!("☐ {}", item.label()),
                            None => item.label().to_string(),
                        };
                        let button = egui::Button::new(egui::RichText::new(text).color(theme.text_primary))
                            .frame(false)
                            .wrap();
                        if ui.add(button).clicked() {
                            activated = Some(item);
                        }
                    }
                });
        });

    let surface = area.response.rect;
    hub.register_region(anchor.with("surface"), Some(anchor), surface);

    match activated {
        Some(item) => shell.activate_menu_item(item, status, action_tx),
        None => {
            let over_surface = ui
                .ctx()
                .pointer_hover_pos()
                .is_some_and(|pos| surface.contains(pos));
            shell.menu_mut().track_pointer(over_surface);
        }
    }
}
