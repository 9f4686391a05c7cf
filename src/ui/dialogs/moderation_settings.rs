//! Moderation settings dialog - audio and video moderation switches.

use eframe::egui;

use super::DialogAction;
use crate::pane::ModerationStatus;

pub struct ModerationSettingsDialog {
    pub open: bool,
    audio_moderation: bool,
    video_moderation: bool,
    initial: ModerationStatus,
}

impl ModerationSettingsDialog {
    pub fn new(status: ModerationStatus) -> Self {
        Self {
            open: true,
            audio_moderation: status.audio_moderation,
            video_moderation: status.video_moderation,
            initial: status,
        }
    }

    /// Actions for every switch that differs from when the dialog opened.
    fn changes(&self) -> Vec<DialogAction> {
        let mut actions = Vec::new();
        if self.audio_moderation != self.initial.audio_moderation {
            actions.push(DialogAction::SetAudioModeration(self.audio_moderation));
        }
        if self.video_moderation != self.initial.video_moderation {
            actions.push(DialogAction::SetVideoModeration(self.video_moderation));
        }
        actions
    }

    /// Render the dialog. Returns the changes once the user saves.
    pub fn render(&mut self, ctx: &egui::Context) -> Vec<DialogAction> {
        if !self.open {
            return Vec::new();
        }

        let mut actions = Vec::new();
        let mut still_open = true;

        egui::Window::new("Moderation settings")
            .open(&mut still_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.checkbox(&mut self.audio_moderation, "Attendees must ask to unmute");
                ui.checkbox(&mut self.video_moderation, "Attendees must ask to start video");
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        actions = self.changes();
                        self.open = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });
            });

        if !still_open {
            self.open = false;
        }

        actions
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_settings_produce_nothing() {
        let dialog = ModerationSettingsDialog::new(ModerationStatus::default());
        assert!(dialog.changes().is_empty());
    }

    #[test]
    fn test_changes_are_reported() {
        let mut dialog = ModerationSettingsDialog::new(ModerationStatus {
            audio_moderation: false,
            video_moderation: true,
        });
        dialog.audio_moderation = true;
        dialog.video_moderation = false;
        assert_eq!(
            dialog.changes(),
            vec![
                DialogAction::SetAudioModeration(true),
                DialogAction::SetVideoModeration(false)
            ]
        );
    }
}
