use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{PaneError, Result};

// Default configuration
pub const DEFAULT_PANE_WIDTH: f32 = 315.0;
pub const DEFAULT_LOG_FILTER: &str = "participants_pane=info";

/// Persisted host settings. Pane state itself is never persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub pane_width: f32,
    /// Open the participants pane on startup
    pub start_open: bool,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            pane_width: DEFAULT_PANE_WIDTH,
            start_open: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("org", "confpane", "participants-pane")
        .ok_or(PaneError::ConfigDir)?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("settings.json"))
}

/// Load settings, falling back to defaults when no file exists yet.
pub fn load_settings() -> Result<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(serde_json::from_str(content)?)
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path()?;
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings = parse_settings(r#"{ "theme": "light" }"#).unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.pane_width, DEFAULT_PANE_WIDTH);
        assert!(settings.start_open);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_malformed_settings_is_an_error() {
        let err = parse_settings("{ not json").unwrap_err();
        assert!(matches!(err, PaneError::Serialization(_)));
    }
}
