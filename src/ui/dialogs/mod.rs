//! Modal dialogs - self-contained dialog components.
//!
//! Each dialog owns its editing state and returns `DialogAction`s instead of
//! mutating application state. The `DialogManager` keeps them as
//! `Option<Dialog>`: `None` = closed, `Some(dialog)` = open.

mod actions;
mod confirm;
mod moderation_settings;
mod status_toasts;

pub use actions::DialogAction;
pub use confirm::ConfirmDialog;
pub use moderation_settings::ModerationSettingsDialog;
pub use status_toasts::render_status_toasts;
