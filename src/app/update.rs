//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::ConferenceApp;
use crate::pane::Stacking;
use crate::protocol::AppAction;
use crate::ui;

impl eframe::App for ConferenceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_actions();

        // Global keyboard shortcuts
        ctx.input(|i| {
            // Alt+P: Toggle participants pane
            if i.modifiers.alt && i.key_pressed(egui::Key::P) {
                let _ = self.action_tx.send(AppAction::TogglePane);
            }
            // Alt+C: Toggle chat
            if i.modifiers.alt && i.key_pressed(egui::Key::C) {
                self.state.chat_open = !self.state.chat_open;
            }
        });

        ctx.request_repaint_after(Duration::from_millis(100));
        // Purge old status messages (toasts) older than 4 seconds
        self.state.purge_old_status_messages(4);

        self.render_frame(ctx);
    }
}

impl ConferenceApp {
    /// Draw one frame and route this frame's clicks to the pointer hub.
    pub fn render_frame(&mut self, ctx: &egui::Context) {
        self.hub.begin_frame();

        self.render_toolbar(ctx);

        // The pane goes first so it takes the rightmost edge
        let presentation = ui::panels::render_participants_pane(
            ctx,
            &mut self.pane,
            &self.state,
            self.settings.pane_width,
            &self.hub,
            &self.action_tx,
        );

        if self.state.chat_open {
            let stacking = presentation.map(|p| p.stacking).unwrap_or(Stacking::Normal);
            self.render_chat_panel(ctx, stacking);
        }

        self.render_central_panel(ctx);
        self.render_dialogs(ctx);

        // Listeners see clicks only after every widget had its turn
        let (clicked, pos) = ctx.input(|i| (i.pointer.any_click(), i.pointer.interact_pos()));
        if clicked {
            let event = self.hub.hit_test(pos);
            self.hub.dispatch(&event);
        }
    }
}
