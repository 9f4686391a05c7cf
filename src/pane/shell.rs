//! The mounted participants pane: search, footer menu and dismiss listener.

use crossbeam_channel::Sender;
use eframe::egui::Id;

use super::dismiss::OutsideDismiss;
use super::layout::{PaneLayout, SectionKind};
use super::menu::{CloseReason, FooterMenu, FooterMenuItem, ModerationStatus};
use super::pointer::PointerHub;
use super::search::SearchQuery;
use crate::protocol::{AppAction, DialogKind};

/// Hit region covering the more-actions trigger and its menu.
pub const MORE_ACTIONS_ANCHOR: &str = "participants_pane_more_actions";

/// State that exists only while the pane is mounted.
///
/// Dropping the shell drops the outside-dismiss subscription, so unmounting
/// is the only cleanup needed.
pub struct PanelShell {
    search: SearchQuery,
    menu: FooterMenu,
    dismiss: OutsideDismiss,
}

impl PanelShell {
    pub(super) fn mount(hub: &PointerHub) -> Self {
        let menu = FooterMenu::new();
        let dismiss = OutsideDismiss::attach(hub, Id::new(MORE_ACTIONS_ANCHOR), menu.handle());
        Self {
            search: SearchQuery::new(),
            menu,
            dismiss,
        }
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchQuery {
        &mut self.search
    }

    pub fn menu(&self) -> &FooterMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut FooterMenu {
        &mut self.menu
    }

    pub fn anchor(&self) -> Id {
        self.dismiss.anchor()
    }

    /// More-actions trigger activated.
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn close_menu(&mut self, reason: CloseReason) {
        self.menu.close(reason);
    }

    /// Visit the layout's sections in order. Sections that list people get
    /// the one shared query; the add-room button gets `None`.
    pub fn for_each_section(
        &mut self,
        layout: &PaneLayout,
        mut visit: impl FnMut(SectionKind, Option<&mut SearchQuery>),
    ) {
        for kind in &layout.sections {
            if kind.accepts_query() {
                visit(*kind, Some(&mut self.search));
            } else {
                visit(*kind, None);
            }
        }
    }

    /// Close control in the header.
    pub fn request_close(&self, tx: &Sender<AppAction>) {
        dispatch(tx, AppAction::ClosePane);
    }

    /// Footer mute-all button. Leaves the menu alone.
    pub fn request_mute_everyone(&self, tx: &Sender<AppAction>) {
        dispatch(tx, AppAction::OpenDialog(DialogKind::MuteEveryone));
    }

    pub fn activate_menu_item(
        &mut self,
        item: FooterMenuItem,
        status: ModerationStatus,
        tx: &Sender<AppAction>,
    ) {
        dispatch(tx, item.action(status));
        self.menu.close(CloseReason::ItemActivated);
    }
}

fn dispatch(tx: &Sender<AppAction>, action: AppAction) {
    tracing::debug!(?action, "participants pane dispatch");
    if let Err(e) = tx.send(action) {
        tracing::warn!("participants pane action dropped: {}", e);
    }
}
