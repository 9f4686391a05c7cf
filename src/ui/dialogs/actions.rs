//! Dialog action types - dialogs return actions instead of mutating state directly.

use crate::protocol::AppAction;

/// Actions that dialogs can return to the main application.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    /// The user confirmed; run this action
    Confirmed(AppAction),
    SetAudioModeration(bool),
    SetVideoModeration(bool),
}

impl DialogAction {
    /// The application action this dialog result stands for.
    pub fn into_app_action(self) -> AppAction {
        match self {
            DialogAction::Confirmed(action) => action,
            DialogAction::SetAudioModeration(on) => AppAction::SetAudioModeration(on),
            DialogAction::SetVideoModeration(on) => AppAction::SetVideoModeration(on),
        }
    }
}
