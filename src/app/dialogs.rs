//! Dialog rendering orchestration

use eframe::egui;

use super::ConferenceApp;
use crate::ui;
use crate::ui::dialogs::DialogAction;

impl ConferenceApp {
    /// Render all dialogs and handle their actions
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Floating status toasts (top-left corner)
        ui::dialogs::render_status_toasts(ctx, &self.state.status_messages);

        let actions = self.dialogs.render(ctx);
        for action in actions {
            self.handle_dialog_action(action);
        }
    }

    /// Confirmed dialogs go back through the action loop like pane requests.
    pub fn handle_dialog_action(&mut self, action: DialogAction) {
        if let Err(e) = self.action_tx.send(action.into_app_action()) {
            tracing::warn!("dropping dialog action: {}", e);
        }
    }
}
