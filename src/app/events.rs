//! Draining actions sent by the pane and dialogs

use super::ConferenceApp;
use crate::events;

impl ConferenceApp {
    /// Apply every queued action. Returns how many were handled.
    pub fn process_actions(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            events::process_action(&mut self.state, &mut self.dialogs, action);
            handled += 1;
        }
        handled
    }
}
