//! Colors and styling for the pane and its host window.

pub mod colors;
pub mod style;
pub mod widgets;

pub use colors::{name_color, role_color, PaneTheme};
pub use style::{apply_app_style, configure_text_styles};
pub use widgets::{initials, render_avatar, section_header};
