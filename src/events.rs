//! Application action processing (pane requests, dialog results, roster changes).

use chrono::Local;

use crate::dialog_manager::DialogManager;
use crate::pane::moderation_status;
use crate::protocol::AppAction;
use crate::state::ConferenceState;

/// Apply one action to the conference state and dialogs.
pub fn process_action(state: &mut ConferenceState, dialogs: &mut DialogManager, action: AppAction) {
    tracing::debug!(?action, "processing action");
    match action {
        AppAction::ClosePane => {
            state.pane_open = false;
        }

        AppAction::TogglePane => {
            state.pane_open = !state.pane_open;
        }

        AppAction::OpenDialog(kind) => {
            dialogs.open(kind, moderation_status(state));
        }

        AppAction::MuteEveryone => {
            let mut count = 0;
            for p in state.roster.remote_participants_mut() {
                if !p.audio_muted {
                    p.audio_muted = true;
                    count += 1;
                }
            }
            tracing::info!(count, "muted everyone");
            push_timed_status(state, "Everyone was muted");
        }

        AppAction::StopEveryoneVideo => {
            for p in state.roster.remote_participants_mut() {
                p.video_muted = true;
            }
            tracing::info!("stopped everyone's video");
            push_timed_status(state, "Everyone's video was stopped");
        }

        AppAction::SetAudioModeration(on) => {
            if let Some(conference) = state.conference.as_mut() {
                conference.audio_moderation = on;
            } else {
                tracing::warn!("audio moderation change without a conference");
            }
        }

        AppAction::SetVideoModeration(on) => {
            if let Some(conference) = state.conference.as_mut() {
                conference.video_moderation = on;
            } else {
                tracing::warn!("video moderation change without a conference");
            }
        }

        AppAction::AdmitLobby(id) => {
            if let Some(name) = state.roster.admit_from_lobby(id).map(|p| p.name.clone()) {
                push_timed_status(state, &format!("{} joined the meeting", name));
            }
        }

        AppAction::RejectLobby(id) => {
            if let Some(p) = state.roster.reject_from_lobby(id) {
                tracing::info!(name = %p.name, "lobby request rejected");
            }
        }

        AppAction::AdmitVisitor(id) => {
            if let Some(name) = state.roster.admit_visitor(id).map(|p| p.name.clone()) {
                push_timed_status(state, &format!("{} was promoted", name));
            }
        }

        AppAction::AddBreakoutRoom => {
            let name = state.roster.add_breakout_room().name.clone();
            tracing::info!(%name, "breakout room added");
        }
    }
}

fn push_timed_status(state: &mut ConferenceState, text: &str) {
    let ts = Local::now().format("%H:%M").to_string();
    state.push_status(format!("[{}] {}", ts, text));
}
