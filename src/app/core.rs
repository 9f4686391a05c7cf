//! Core ConferenceApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;

use crate::config::{save_settings, Settings};
use crate::dialog_manager::DialogManager;
use crate::pane::{ParticipantsPane, PointerHub};
use crate::protocol::AppAction;
use crate::state::ConferenceState;
use crate::ui;

pub struct ConferenceApp {
    // Conference, roster and presentation state
    pub state: ConferenceState,

    // The participants pane and the window-wide pointer hub it listens on
    pub pane: ParticipantsPane,
    pub hub: PointerHub,

    // Actions from the pane and dialogs, drained once per frame
    pub action_tx: Sender<AppAction>,
    pub action_rx: Receiver<AppAction>,

    // Dialogs - managed centrally by DialogManager
    pub dialogs: DialogManager,

    pub settings: Settings,

    // Only windowed apps write settings back on exit
    persist_on_exit: bool,
}

impl ConferenceApp {
    pub(super) fn get_theme(&self) -> ui::theme::PaneTheme {
        match self.settings.theme.as_str() {
            "light" => ui::theme::PaneTheme::light(),
            _ => ui::theme::PaneTheme::dark(),
        }
    }

    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }
        ui::theme::apply_app_style(&cc.egui_ctx);

        let mut app = Self::with_state(ConferenceState::demo(), settings);
        app.persist_on_exit = true;
        app
    }

    /// Build the app around an existing state, without a window.
    pub fn with_state(mut state: ConferenceState, settings: Settings) -> Self {
        let (action_tx, action_rx) = unbounded::<AppAction>();
        state.pane_open = settings.start_open;

        Self {
            state,
            pane: ParticipantsPane::new(),
            hub: PointerHub::new(),
            action_tx,
            action_rx,
            dialogs: DialogManager::new(),
            settings,
            persist_on_exit: false,
        }
    }
}

impl Drop for ConferenceApp {
    fn drop(&mut self) {
        if !self.persist_on_exit {
            return;
        }
        // Remember whether the pane was open for the next start
        self.settings.start_open = self.state.pane_open;
        if let Err(e) = save_settings(&self.settings) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
