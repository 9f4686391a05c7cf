//! Per-frame visibility decisions for the pane.

use crate::state::{BreakoutSupport, ConferenceState};

use super::menu::ModerationStatus;

/// Every conditional in the pane's composition, read once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityFlags {
    pub pane_open: bool,
    pub breakout_rooms: BreakoutSupport,
    pub show_add_room_button: bool,
    pub show_current_visitors_list: bool,
    /// Footer is moderator-only
    pub show_footer: bool,
    pub show_mute_all: bool,
    pub show_more_actions: bool,
}

impl VisibilityFlags {
    pub fn read(state: &ConferenceState) -> Self {
        Self {
            pane_open: state.pane_open,
            breakout_rooms: state.breakout_support(),
            show_add_room_button: state.is_add_breakout_room_visible(),
            show_current_visitors_list: state.should_display_current_visitors_list(),
            show_footer: state.is_local_moderator(),
            show_mute_all: state.is_mute_all_visible(),
            show_more_actions: state.is_more_actions_visible(),
        }
    }

    /// Everything on; handy as a base in tests.
    pub fn all() -> Self {
        Self {
            pane_open: true,
            breakout_rooms: BreakoutSupport::Supported,
            show_add_room_button: true,
            show_current_visitors_list: true,
            show_footer: true,
            show_mute_all: true,
            show_more_actions: true,
        }
    }
}

/// Presentation inputs that never change what is shown, only how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationFlags {
    pub chat_open: bool,
    pub is_mobile: bool,
    pub viewport_width: f32,
    pub pane_width: f32,
}

pub fn moderation_status(state: &ConferenceState) -> ModerationStatus {
    ModerationStatus {
        audio_moderation: state.audio_moderation(),
        video_moderation: state.video_moderation(),
    }
}
