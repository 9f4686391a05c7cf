//! Confirmation dialogs for bulk moderator actions.

use eframe::egui;

use super::DialogAction;
use crate::protocol::{AppAction, DialogKind};

/// Self-contained confirmation dialog state.
pub struct ConfirmDialog {
    pub open: bool,
    title: &'static str,
    body: &'static str,
    confirm_label: &'static str,
    action: AppAction,
}

impl ConfirmDialog {
    pub fn mute_everyone() -> Self {
        Self {
            open: true,
            title: "Mute everyone?",
            body: "You won't be able to unmute them, but they can unmute themselves at any time.",
            confirm_label: "Mute",
            action: AppAction::MuteEveryone,
        }
    }

    pub fn stop_everyone_video() -> Self {
        Self {
            open: true,
            title: "Stop everyone's video?",
            body: "You won't be able to turn their video back on, but they can do so at any time.",
            confirm_label: "Stop video",
            action: AppAction::StopEveryoneVideo,
        }
    }

    /// Dialog for a confirmable kind, `None` for other dialogs.
    pub fn for_kind(kind: DialogKind) -> Option<Self> {
        match kind {
            DialogKind::MuteEveryone => Some(Self::mute_everyone()),
            DialogKind::StopEveryoneVideo => Some(Self::stop_everyone_video()),
            DialogKind::ModerationSettings => None,
        }
    }

    pub fn title(&self) -> &str {
        self.title
    }

    /// Action sent when the user confirms.
    pub fn confirm(&mut self) -> DialogAction {
        self.open = false;
        DialogAction::Confirmed(self.action.clone())
    }

    /// Render the dialog.
    /// Returns `Some(DialogAction::Confirmed)` if the user confirmed.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action: Option<DialogAction> = None;
        let mut still_open = true;

        egui::Window::new(self.title)
            .open(&mut still_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(self.body);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button(self.confirm_label).clicked() {
                        action = Some(self.confirm());
                    }
                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.open = false;
                }
            });

        if !still_open {
            self.open = false;
        }

        action
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind() {
        assert!(ConfirmDialog::for_kind(DialogKind::MuteEveryone).is_some());
        assert!(ConfirmDialog::for_kind(DialogKind::StopEveryoneVideo).is_some());
        assert!(ConfirmDialog::for_kind(DialogKind::ModerationSettings).is_none());
    }

    #[test]
    fn test_confirm_closes_and_yields_action() {
        let mut dialog = ConfirmDialog::mute_everyone();
        assert!(dialog.is_open());
        assert_eq!(
            dialog.confirm(),
            DialogAction::Confirmed(AppAction::MuteEveryone)
        );
        assert!(!dialog.is_open());
    }
}
