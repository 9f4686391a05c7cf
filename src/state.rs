//! Conference state owned by the host application.
//!
//! `ConferenceState` is the pane's external source of truth: the pane reads
//! the predicates below once per frame and never writes to this struct.
//! Mutation happens in the app's action loop.

use std::time::Instant;

use crate::roster::{Role, Roster};

/// Session-level capabilities of the joined conference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conference {
    pub breakout_rooms_supported: bool,
    /// Attendees cannot unmute themselves
    pub audio_moderation: bool,
    /// Attendees cannot start their video
    pub video_moderation: bool,
}

impl Default for Conference {
    fn default() -> Self {
        Self {
            breakout_rooms_supported: true,
            audio_moderation: false,
            video_moderation: false,
        }
    }
}

/// Whether breakout rooms can be used in the current conference.
///
/// `Unknown` means the conference object is not available (yet), which is
/// different from the conference saying no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakoutSupport {
    Supported,
    Unsupported,
    Unknown,
}

impl BreakoutSupport {
    pub fn is_supported(self) -> bool {
        matches!(self, BreakoutSupport::Supported)
    }
}

/// Application state read by the participants pane.
#[derive(Debug, Default)]
pub struct ConferenceState {
    /// Whether the participants pane should be shown.
    pub pane_open: bool,

    /// Whether the chat panel is open (presentation only).
    pub chat_open: bool,

    /// Narrow/touch client; only affects stacking order.
    pub is_mobile: bool,

    /// The joined conference. `None` while joining or reconnecting.
    pub conference: Option<Conference>,

    /// Everybody in, or waiting for, the conference.
    pub roster: Roster,

    /// Visitor overflow display mode: visitors are listed inside the pane.
    pub visitors_overflow: bool,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,
}

impl ConferenceState {
    /// Demo conference with a populated roster and the local user as moderator.
    pub fn demo() -> Self {
        Self {
            pane_open: true,
            conference: Some(Conference::default()),
            roster: Roster::demo(),
            visitors_overflow: true,
            ..Default::default()
        }
    }

    pub fn is_local_moderator(&self) -> bool {
        self.roster
            .local_participant()
            .map(|p| p.role == Role::Moderator)
            .unwrap_or(false)
    }

    pub fn breakout_support(&self) -> BreakoutSupport {
        match &self.conference {
            Some(c) if c.breakout_rooms_supported => BreakoutSupport::Supported,
            Some(_) => BreakoutSupport::Unsupported,
            None => BreakoutSupport::Unknown,
        }
    }

    /// Moderators may create rooms when the conference supports them.
    pub fn is_add_breakout_room_visible(&self) -> bool {
        self.is_local_moderator() && self.breakout_support().is_supported()
    }

    /// Mute-all only makes sense with at least two remote participants.
    pub fn is_mute_all_visible(&self) -> bool {
        self.is_local_moderator() && self.roster.meeting.len() > 2
    }

    pub fn is_more_actions_visible(&self) -> bool {
        self.is_local_moderator() && self.conference.is_some()
    }

    pub fn should_display_current_visitors_list(&self) -> bool {
        self.visitors_overflow && !self.roster.visitors.is_empty()
    }

    pub fn audio_moderation(&self) -> bool {
        self.conference.as_ref().is_some_and(|c| c.audio_moderation)
    }

    pub fn video_moderation(&self) -> bool {
        self.conference.as_ref().is_some_and(|c| c.video_moderation)
    }

    pub fn set_local_role(&mut self, role: Role) {
        if let Some(local) = self.roster.meeting.iter_mut().find(|p| p.local) {
            local.role = role;
        }
    }

    /// Step breakout support Supported -> Unsupported -> Unknown -> Supported.
    ///
    /// Moderation flags survive the Supported/Unsupported step; going through
    /// Unknown drops the conference, so they reset.
    pub fn cycle_breakout_support(&mut self) -> BreakoutSupport {
        match self.breakout_support() {
            BreakoutSupport::Supported => {
                if let Some(c) = self.conference.as_mut() {
                    c.breakout_rooms_supported = false;
                }
            }
            BreakoutSupport::Unsupported => self.conference = None,
            BreakoutSupport::Unknown => self.conference = Some(Conference::default()),
        }
        self.breakout_support()
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status_messages.push((message.into(), Instant::now()));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_state_is_moderated() {
        let state = ConferenceState::demo();
        assert!(state.pane_open);
        assert!(state.is_local_moderator());
        assert!(state.is_mute_all_visible());
        assert!(state.is_more_actions_visible());
        assert!(state.is_add_breakout_room_visible());
        assert!(state.should_display_current_visitors_list());
    }

    #[test]
    fn test_breakout_support_distinguishes_unknown() {
        let mut state = ConferenceState::demo();
        assert_eq!(state.breakout_support(), BreakoutSupport::Supported);

        state.conference = Some(Conference {
            breakout_rooms_supported: false,
            ..Default::default()
        });
        assert_eq!(state.breakout_support(), BreakoutSupport::Unsupported);

        state.conference = None;
        assert_eq!(state.breakout_support(), BreakoutSupport::Unknown);
        assert!(!state.breakout_support().is_supported());
    }

    #[test]
    fn test_cycle_breakout_support() {
        let mut state = ConferenceState::demo();
        assert_eq!(state.cycle_breakout_support(), BreakoutSupport::Unsupported);
        assert!(state.conference.is_some());
        assert_eq!(state.cycle_breakout_support(), BreakoutSupport::Unknown);
        assert!(!state.is_more_actions_visible());
        assert_eq!(state.cycle_breakout_support(), BreakoutSupport::Supported);
    }

    #[test]
    fn test_non_moderator_sees_no_moderation_controls() {
        let mut state = ConferenceState::demo();
        state.set_local_role(Role::Participant);
        assert!(!state.is_local_moderator());
        assert!(!state.is_mute_all_visible());
        assert!(!state.is_more_actions_visible());
        assert!(!state.is_add_breakout_room_visible());
    }

    #[test]
    fn test_mute_all_needs_plural_remote_participants() {
        let mut state = ConferenceState::demo();
        state.roster.meeting.truncate(2);
        assert!(!state.is_mute_all_visible());
    }

    #[test]
    fn test_purge_old_status_messages() {
        let mut state = ConferenceState::default();
        state.push_status("Everyone muted");
        state.purge_old_status_messages(4);
        assert_eq!(state.status_messages.len(), 1);
        state.purge_old_status_messages(0);
        assert!(state.status_messages.is_empty());
    }
}
