//! Participants side panel: header, roster sections and moderator footer.

use crossbeam_channel::Sender;
use eframe::egui::{self, Stroke};

use super::{footer, rosters};
use crate::pane::{
    moderation_status, PaneLayout, PanePresentation, ParticipantsPane, PointerHub,
    PresentationFlags, VisibilityFlags,
};
use crate::protocol::AppAction;
use crate::state::ConferenceState;
use crate::ui::theme::PaneTheme;

/// Hit region id of the whole pane.
pub const PANE_REGION: &str = "participants_pane";

/// Render the right participants panel.
///
/// Mounts or unmounts the pane from `state.pane_open` first, so a hidden pane
/// draws nothing and holds no pointer listener. Returns how the pane was
/// presented, or `None` when hidden.
pub fn render_participants_pane(
    ctx: &egui::Context,
    pane: &mut ParticipantsPane,
    state: &ConferenceState,
    pane_width: f32,
    hub: &PointerHub,
    action_tx: &Sender<AppAction>,
) -> Option<PanePresentation> {
    let flags = VisibilityFlags::read(state);
    let shell = pane.sync(flags.pane_open, hub)?;
    let layout = PaneLayout::compose(&flags)?;

    let presentation = PanePresentation::resolve(&PresentationFlags {
        chat_open: state.chat_open,
        is_mobile: state.is_mobile,
        viewport_width: ctx.screen_rect().width(),
        pane_width,
    });
    let theme = PaneTheme::for_ctx(ctx);
    let status = moderation_status(state);
    let pane_region = egui::Id::new(PANE_REGION);

    egui::SidePanel::right("participants_pane")
        .resizable(false)
        .exact_width(presentation.width)
        .frame(
            egui::Frame::new()
                .fill(theme.surface[1])
                .inner_margin(egui::Margin::same(0))
                .stroke(Stroke::new(1.0, theme.border_medium)),
        )
        .show(ctx, |ui| {
            hub.register_region(pane_region, None, ui.max_rect());

            egui::TopBottomPanel::top("participants_pane_header")
                .exact_height(60.0)
                .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(16, 0)))
                .show_inside(ui, |ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close = egui::Button::new(egui::RichText::new("✕").size(16.0)).frame(false);
                        if ui.add(close).on_hover_text("Close").clicked() {
                            shell.request_close(action_tx);
                        }
                    });
                });

            if let Some(footer_layout) = layout.footer {
                egui::TopBottomPanel::bottom("participants_pane_footer")
                    .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(16, 16)))
                    .show_inside(ui, |ui| {
                        footer::render_footer(
                            ui,
                            shell,
                            footer_layout,
                            status,
                            hub,
                            pane_region,
                            &theme,
                            action_tx,
                        );
                    });
            }

            egui::CentralPanel::default()
                .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(16, 0)))
                .show_inside(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            shell.for_each_section(&layout, |kind, search| {
                                rosters::render_section(ui, kind, search, state, &theme, action_tx);
                            });
                        });
                });
        });

    Some(presentation)
}
