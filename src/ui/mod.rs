//! egui rendering for the host window.
//!
//! - `panels`: the participants pane (header, rosters, footer menu)
//! - `dialogs`: confirmation and settings dialogs, status toasts
//! - `theme`: colors, text styles and small widgets

pub mod dialogs;
pub mod panels;
pub mod theme;

pub use dialogs::*;
pub use panels::*;
pub use theme::*;
