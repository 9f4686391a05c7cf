//! Error types for the host application.
//!
//! The pane itself has no failure modes; these cover settings persistence.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaneError {
    #[error("could not determine the configuration directory")]
    ConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaneError>;
