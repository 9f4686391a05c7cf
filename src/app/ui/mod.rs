//! Host window chrome around the participants pane.

pub mod panels;
