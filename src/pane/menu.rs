//! Footer "more actions" menu state machine.
//!
//! ```text
//!            trigger
//!   Closed ----------> Open
//!     ^                  |
//!     +------------------+
//!   trigger | outside click | pointer left | item activated | Escape
//! ```
//!
//! The state lives in a shared cell so the outside-dismiss listener can
//! close the menu from the pointer hub.

use std::cell::Cell;
use std::rc::Rc;

use crate::protocol::{AppAction, DialogKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Why the menu closed. Only used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    OutsideClick,
    PointerLeft,
    ItemActivated,
    Escape,
}

/// Shared handle to one menu's open state.
#[derive(Debug, Clone, Default)]
pub struct MenuHandle {
    state: Rc<Cell<MenuState>>,
}

impl MenuHandle {
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get() == MenuState::Open
    }

    /// Close the menu. Returns false when it was already closed.
    pub fn close(&self, reason: CloseReason) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state.set(MenuState::Closed);
        tracing::debug!(?reason, "footer menu closed");
        true
    }

    fn open(&self) {
        self.state.set(MenuState::Open);
        tracing::debug!("footer menu opened");
    }
}

/// Moderation switches shown as checkable menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModerationStatus {
    pub audio_moderation: bool,
    pub video_moderation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMenuItem {
    StopEveryoneVideo,
    AllowAttendeesToUnmute,
    AllowAttendeesToStartVideo,
    ModerationSettings,
}

impl FooterMenuItem {
    pub const ALL: [FooterMenuItem; 4] = [
        FooterMenuItem::StopEveryoneVideo,
        FooterMenuItem::AllowAttendeesToUnmute,
        FooterMenuItem::AllowAttendeesToStartVideo,
        FooterMenuItem::ModerationSettings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FooterMenuItem::StopEveryoneVideo => "Stop everyone's video",
            FooterMenuItem::AllowAttendeesToUnmute => "Allow attendees to unmute themselves",
            FooterMenuItem::AllowAttendeesToStartVideo => "Allow attendees to start their video",
            FooterMenuItem::ModerationSettings => "Moderation settings",
        }
    }

    /// Checked state for toggle items, `None` for plain actions.
    pub fn checked(self, status: ModerationStatus) -> Option<bool> {
        match self {
            FooterMenuItem::AllowAttendeesToUnmute => Some(!status.audio_moderation),
            FooterMenuItem::AllowAttendeesToStartVideo => Some(!status.video_moderation),
            _ => None,
        }
    }

    pub fn action(self, status: ModerationStatus) -> AppAction {
        match self {
            FooterMenuItem::StopEveryoneVideo => {
                AppAction::OpenDialog(DialogKind::StopEveryoneVideo)
            }
            FooterMenuItem::AllowAttendeesToUnmute => {
                AppAction::SetAudioModeration(!status.audio_moderation)
            }
            FooterMenuItem::AllowAttendeesToStartVideo => {
                AppAction::SetVideoModeration(!status.video_moderation)
            }
            FooterMenuItem::ModerationSettings => {
                AppAction::OpenDialog(DialogKind::ModerationSettings)
            }
        }
    }
}

/// The footer's context menu: open state plus pointer-leave tracking.
#[derive(Debug, Default)]
pub struct FooterMenu {
    handle: MenuHandle,
    /// Pointer was over the menu surface last frame
    hovered: bool,
}

impl FooterMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> MenuHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> MenuState {
        self.handle.state()
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_open()
    }

    /// Trigger button activated.
    pub fn toggle(&mut self) {
        if self.handle.is_open() {
            self.handle.close(CloseReason::Toggle);
        } else {
            self.hovered = false;
            self.handle.open();
        }
    }

    pub fn close(&mut self, reason: CloseReason) -> bool {
        self.hovered = false;
        self.handle.close(reason)
    }

    /// Feed the menu surface's hover state once per frame. Leaving the
    /// surface after having entered it closes the menu.
    pub fn track_pointer(&mut self, over_surface: bool) {
        if !self.is_open() {
            self.hovered = false;
            return;
        }
        if self.hovered && !over_surface {
            self.close(CloseReason::PointerLeft);
            return;
        }
        self.hovered = over_surface;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let menu = FooterMenu::new();
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_trigger_toggles() {
        let mut menu = FooterMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn test_close_on_closed_menu_is_noop() {
        let mut menu = FooterMenu::new();
        assert!(!menu.close(CloseReason::Escape));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_handle_shares_state() {
        let mut menu = FooterMenu::new();
        let handle = menu.handle();
        menu.toggle();
        assert!(handle.is_open());
        assert!(handle.close(CloseReason::OutsideClick));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_pointer_leaving_surface_closes() {
        let mut menu = FooterMenu::new();
        menu.toggle();

        // Pointer still on the trigger: not over the surface yet
        menu.track_pointer(false);
        assert!(menu.is_open());

        menu.track_pointer(true);
        assert!(menu.is_open());

        menu.track_pointer(false);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_reopen_resets_hover_tracking() {
        let mut menu = FooterMenu::new();
        menu.toggle();
        menu.track_pointer(true);
        menu.toggle();
        menu.toggle();
        menu.track_pointer(false);
        assert!(menu.is_open());
    }

    #[test]
    fn test_toggle_items_invert_moderation() {
        let status = ModerationStatus {
            audio_moderation: true,
            video_moderation: false,
        };
        assert_eq!(FooterMenuItem::AllowAttendeesToUnmute.checked(status), Some(false));
        assert_eq!(
            FooterMenuItem::AllowAttendeesToUnmute.action(status),
            AppAction::SetAudioModeration(false)
        );
        assert_eq!(
            FooterMenuItem::AllowAttendeesToStartVideo.action(status),
            AppAction::SetVideoModeration(true)
        );
        assert_eq!(FooterMenuItem::StopEveryoneVideo.checked(status), None);
    }
}
