//! Pure composition of the pane from its visibility flags.

use super::flags::{PresentationFlags, VisibilityFlags};

/// Viewports at most this wide get a full-width pane.
pub const NARROW_VIEWPORT_MAX: f32 = 580.0;

/// The closed set of body sections, in no particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Visitors asking to join the meeting
    Visitors,
    /// Participants knocking at the lobby
    Lobby,
    /// Active participants; carries the search input
    Meeting,
    BreakoutRooms,
    AddBreakoutRoom,
    /// Visitors currently watching (overflow mode)
    CurrentVisitors,
}

impl SectionKind {
    /// Sections that list people and narrow them by the shared query.
    pub fn accepts_query(self) -> bool {
        !matches!(self, SectionKind::AddBreakoutRoom)
    }

    /// The one section that edits the query.
    pub fn edits_query(self) -> bool {
        matches!(self, SectionKind::Meeting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLayout {
    pub mute_all: bool,
    pub more_actions: bool,
}

/// What a mounted pane shows this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneLayout {
    /// Body sections in display order
    pub sections: Vec<SectionKind>,
    /// `None` for non-moderators
    pub footer: Option<FooterLayout>,
}

impl PaneLayout {
    /// Returns `None` when the pane is closed.
    ///
    /// People needing action come first (visitors, lobby), then the meeting,
    /// then rooms. Breakout support dominates the add-room permission.
    pub fn compose(flags: &VisibilityFlags) -> Option<Self> {
        if !flags.pane_open {
            return None;
        }

        let rooms = flags.breakout_rooms.is_supported();
        let mut sections = vec![SectionKind::Visitors, SectionKind::Lobby, SectionKind::Meeting];
        if rooms {
            sections.push(SectionKind::BreakoutRooms);
        }
        if rooms && flags.show_add_room_button {
            sections.push(SectionKind::AddBreakoutRoom);
        }
        if flags.show_current_visitors_list {
            sections.push(SectionKind::CurrentVisitors);
        }

        let footer = flags.show_footer.then_some(FooterLayout {
            mute_all: flags.show_mute_all,
            more_actions: flags.show_more_actions,
        });

        Some(Self { sections, footer })
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.contains(&kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stacking {
    Normal,
    /// Chat overlays the pane
    BehindChat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanePresentation {
    pub width: f32,
    pub full_width: bool,
    pub stacking: Stacking,
}

impl PanePresentation {
    pub fn resolve(flags: &PresentationFlags) -> Self {
        let full_width = flags.viewport_width <= NARROW_VIEWPORT_MAX;
        let width = if full_width {
            flags.viewport_width
        } else {
            flags.pane_width
        };
        let stacking = if flags.is_mobile && flags.chat_open {
            Stacking::BehindChat
        } else {
            Stacking::Normal
        };
        Self {
            width,
            full_width,
            stacking,
        }
    }
}
