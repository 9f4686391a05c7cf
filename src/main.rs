//! Participants pane demo host
//!
//! Architecture:
//! - Main thread: runs the egui UI and the action loop
//! - The pane and dialogs send `AppAction`s over a crossbeam channel,
//!   drained at the start of every frame

use participants_pane::app::ConferenceApp;
use participants_pane::config::{load_settings, Settings};
use participants_pane::logging;

fn main() -> eframe::Result<()> {
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        }
    };
    logging::init(&settings.log_filter);
    tracing::info!("starting participants pane");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([360.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Participants",
        options,
        Box::new(|cc| Ok(Box::new(ConferenceApp::new(cc, settings)))),
    )
}
