//! Dialog management for centralized dialog state and rendering.
//!
//! This is the dialog subsystem the participants pane talks to through
//! `AppAction::OpenDialog`. The pane never sees the dialogs themselves.

use eframe::egui::Context;

use crate::pane::ModerationStatus;
use crate::protocol::DialogKind;
use crate::ui::dialogs::{ConfirmDialog, DialogAction, ModerationSettingsDialog};

/// Manages all application dialogs in one place.
///
/// Uses the Option<Dialog> pattern where None = closed, Some = open.
#[derive(Default)]
pub struct DialogManager {
    pub confirm_dialog: Option<ConfirmDialog>,
    pub moderation_dialog: Option<ModerationSettingsDialog>,
}

impl DialogManager {
    /// Create a new DialogManager with all dialogs closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a dialog. A second confirmation replaces the one on screen.
    pub fn open(&mut self, kind: DialogKind, status: ModerationStatus) {
        tracing::debug!(?kind, "opening dialog");
        match kind {
            DialogKind::MuteEveryone | DialogKind::StopEveryoneVideo => {
                self.confirm_dialog = ConfirmDialog::for_kind(kind);
            }
            DialogKind::ModerationSettings => {
                self.moderation_dialog = Some(ModerationSettingsDialog::new(status));
            }
        }
    }

    pub fn is_any_open(&self) -> bool {
        self.confirm_dialog.is_some() || self.moderation_dialog.is_some()
    }

    /// Render all dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context) -> Vec<DialogAction> {
        let mut actions: Vec<DialogAction> = Vec::new();

        let mut close_confirm = false;
        if let Some(ref mut dialog) = self.confirm_dialog {
            if let Some(action) = dialog.render(ctx) {
                actions.push(action);
            }
            if !dialog.is_open() {
                close_confirm = true;
            }
        }
        if close_confirm {
            self.confirm_dialog = None;
        }

        let mut close_moderation = false;
        if let Some(ref mut dialog) = self.moderation_dialog {
            actions.extend(dialog.render(ctx));
            if !dialog.is_open() {
                close_moderation = true;
            }
        }
        if close_moderation {
            self.moderation_dialog = None;
        }

        actions
    }
}
