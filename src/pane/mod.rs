//! Participants pane: visibility gate, shared search, footer menu and its
//! outside-click dismissal, plus the pure layout composition.
//!
//! Nothing in here draws; `ui::panels::participants` renders a mounted
//! [`PanelShell`] with egui.

pub mod dismiss;
pub mod flags;
pub mod gate;
pub mod layout;
pub mod menu;
pub mod pointer;
pub mod search;
pub mod shell;

pub use dismiss::OutsideDismiss;
pub use flags::{moderation_status, PresentationFlags, VisibilityFlags};
pub use gate::ParticipantsPane;
pub use layout::{FooterLayout, PaneLayout, PanePresentation, SectionKind, Stacking};
pub use menu::{CloseReason, FooterMenu, FooterMenuItem, MenuHandle, MenuState, ModerationStatus};
pub use pointer::{ListenerStats, PointerEvent, PointerHub, Subscription};
pub use search::SearchQuery;
pub use shell::{PanelShell, MORE_ACTIONS_ANCHOR};
