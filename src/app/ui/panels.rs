//! Toolbar, chat panel, and central panel rendering

use eframe::egui;

use crate::app::ConferenceApp;
use crate::pane::Stacking;
use crate::protocol::AppAction;
use crate::roster::Role;
use crate::state::BreakoutSupport;

/// Hit region id of the mobile chat overlay.
pub const CHAT_OVERLAY_REGION: &str = "chat_overlay";

impl ConferenceApp {
    /// Render the toolbar with the pane and conference toggles
    pub(in crate::app) fn render_toolbar(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();

        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .stroke(egui::Stroke::new(1.0, theme.border_medium)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(self.state.pane_open, "Participants")
                        .on_hover_text("Alt+P")
                        .clicked()
                    {
                        let _ = self.action_tx.send(AppAction::TogglePane);
                    }
                    if ui
                        .selectable_label(self.state.chat_open, "Chat")
                        .on_hover_text("Alt+C")
                        .clicked()
                    {
                        self.state.chat_open = !self.state.chat_open;
                    }

                    ui.separator();

                    let moderator = self.state.is_local_moderator();
                    if ui.selectable_label(moderator, "Moderator").clicked() && !moderator {
                        self.state.set_local_role(Role::Moderator);
                    }
                    if ui.selectable_label(!moderator, "Participant").clicked() && moderator {
                        self.state.set_local_role(Role::Participant);
                    }

                    ui.separator();

                    ui.checkbox(&mut self.state.visitors_overflow, "Visitor overflow");
                    ui.checkbox(&mut self.state.is_mobile, "Mobile");

                    let label = match self.state.breakout_support() {
                        BreakoutSupport::Supported => "Breakout rooms: supported",
                        BreakoutSupport::Unsupported => "Breakout rooms: unsupported",
                        BreakoutSupport::Unknown => "Breakout rooms: unknown",
                    };
                    if ui.button(label).clicked() {
                        let support = self.state.cycle_breakout_support();
                        tracing::debug!(?support, "breakout support changed");
                    }
                });
            });
    }

    /// Render the chat panel. Behind-chat stacking draws it over the pane.
    pub(in crate::app) fn render_chat_panel(&mut self, ctx: &egui::Context, stacking: Stacking) {
        let theme = self.get_theme();
        let frame = egui::Frame::new()
            .fill(theme.surface[2])
            .inner_margin(egui::Margin::same(16))
            .stroke(egui::Stroke::new(1.0, theme.border_medium));

        match stacking {
            Stacking::BehindChat => {
                let screen = ctx.screen_rect();
                let overlay = egui::Area::new(egui::Id::new(CHAT_OVERLAY_REGION))
                    .order(egui::Order::Foreground)
                    .fixed_pos(screen.left_top())
                    .show(ctx, |ui| {
                        frame.show(ui, |ui| {
                            ui.set_min_size(screen.size());
                            self.chat_contents(ui);
                        });
                    });
                // Drawn after the pane, so it sits above the pane's regions
                self.hub
                    .register_region(egui::Id::new(CHAT_OVERLAY_REGION), None, overlay.response.rect);
            }
            Stacking::Normal => {
                egui::SidePanel::right("chat_panel")
                    .resizable(false)
                    .exact_width(self.settings.pane_width)
                    .frame(frame)
                    .show(ctx, |ui| self.chat_contents(ui));
            }
        }
    }

    fn chat_contents(&mut self, ui: &mut egui::Ui) {
        let theme = self.get_theme();
        ui.horizontal(|ui| {
            ui.heading("Chat");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                    self.state.chat_open = false;
                }
            });
        });
        ui.add_space(8.0);
        ui.label(egui::RichText::new("No messages yet").color(theme.text_muted));
    }

    /// Render the central conference area
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface[0]).inner_margin(24.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.heading("Conference");
                    let count = self.state.roster.meeting.len();
                    ui.label(
                        egui::RichText::new(format!("{} in the meeting", count))
                            .color(theme.text_secondary),
                    );
                    if !self.state.roster.lobby.is_empty() {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} waiting in the lobby",
                                self.state.roster.lobby.len()
                            ))
                            .color(theme.warning),
                        );
                    }
                });
            });
    }
}
