//! Participants pane for a video-conferencing client.
//!
//! The pane itself lives in [`pane`] (mount gating, search, the moderator
//! footer menu and outside-click dismissal); [`ui`] draws it with egui and
//! [`app`] hosts it in an eframe window.

pub mod app;
pub mod config;
pub mod dialog_manager;
pub mod error;
pub mod events;
pub mod logging;
pub mod pane;
pub mod protocol;
pub mod roster;
pub mod state;
pub mod ui;

#[cfg(test)]
mod integration_tests;
