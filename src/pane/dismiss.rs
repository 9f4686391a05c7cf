//! Closes the footer menu when a click lands outside its anchor.

use eframe::egui::Id;

use super::menu::{CloseReason, MenuHandle};
use super::pointer::{PointerEvent, PointerHub, Subscription};

/// Global click listener tied to a mounted pane.
///
/// Registered by [`OutsideDismiss::attach`], deregistered when dropped.
pub struct OutsideDismiss {
    anchor: Id,
    _subscription: Subscription,
}

impl OutsideDismiss {
    pub fn attach(hub: &PointerHub, anchor: Id, menu: MenuHandle) -> Self {
        let subscription = hub.subscribe(move |event| {
            dismiss_if_outside(&menu, anchor, event);
        });
        Self {
            anchor,
            _subscription: subscription,
        }
    }

    pub fn anchor(&self) -> Id {
        self.anchor
    }
}

/// Returns true if the menu was closed.
pub fn dismiss_if_outside(menu: &MenuHandle, anchor: Id, event: &PointerEvent) -> bool {
    if !menu.is_open() {
        return false;
    }
    if event.is_within(anchor) {
        return false;
    }
    menu.close(CloseReason::OutsideClick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::menu::FooterMenu;

    fn event(path: &[&str]) -> PointerEvent {
        PointerEvent {
            pos: None,
            path: path.iter().map(|p| Id::new(*p)).collect(),
        }
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let mut menu = FooterMenu::new();
        menu.toggle();
        assert!(dismiss_if_outside(&menu.handle(), Id::new("anchor"), &event(&["pane", "body"])));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_inside_anchor_keeps_menu_open() {
        let mut menu = FooterMenu::new();
        menu.toggle();
        let anchor = Id::new("anchor");
        assert!(!dismiss_if_outside(&menu.handle(), anchor, &event(&["pane", "anchor"])));
        assert!(!dismiss_if_outside(
            &menu.handle(),
            anchor,
            &event(&["pane", "anchor", "trigger"])
        ));
        assert!(menu.is_open());
    }

    #[test]
    fn test_closed_menu_is_untouched() {
        let menu = FooterMenu::new();
        assert!(!dismiss_if_outside(&menu.handle(), Id::new("anchor"), &event(&[])));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_attach_and_drop() {
        let hub = PointerHub::new();
        let mut menu = FooterMenu::new();
        let dismiss = OutsideDismiss::attach(&hub, Id::new("anchor"), menu.handle());
        assert_eq!(hub.listener_count(), 1);

        menu.toggle();
        hub.dispatch(&event(&["elsewhere"]));
        assert!(!menu.is_open());

        drop(dismiss);
        assert_eq!(hub.listener_count(), 0);

        menu.toggle();
        hub.dispatch(&event(&["elsewhere"]));
        assert!(menu.is_open());
    }
}
