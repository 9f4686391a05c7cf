//! Host application for the participants pane
//!
//! This module organizes the main application into focused submodules:
//! - `core`: ConferenceApp struct and initialization
//! - `events`: Draining pane and dialog actions
//! - `update`: Main update loop and global shortcuts
//! - `dialogs`: Dialog rendering orchestration
//! - `ui::panels`: Toolbar, chat panel and central panel rendering

pub mod core;
pub mod dialogs;
pub mod events;
pub mod update;
pub mod ui;

pub use core::ConferenceApp;
