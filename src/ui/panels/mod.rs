//! Side panels: the participants pane and its pieces.

pub mod footer;
pub mod participants;
pub mod rosters;

pub use participants::{render_participants_pane, PANE_REGION};
