//! # Configuration
//!
//! Palette, font and window settings handed to the calendar at construction.
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```yaml
//! seed_date: 2024-03-15
//! palette:
//!   selected: "#00AA00"
//! fonts:
//!   calendar_button: 18.0
//! ```

use button_calendar_core::CalendarDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AppError;

/// Top-level calendar configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Month to open on and date to pre-select; today when absent
    pub seed_date: Option<CalendarDate>,
    pub palette: Palette,
    pub fonts: FontSizes,
    pub window: WindowConfig,
}

impl CalendarConfig {
    /// Load a YAML config file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded calendar config from {}", path.display());
        Ok(config)
    }
}

/// Cell and button colours as `#RRGGBB` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub default: String,
    pub text_default: String,
    pub selected: String,
    pub text_selected: String,
    pub off_month: String,
    pub range_select_anchor: String,
    pub range_select_hover: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default: "#183440".to_string(),       // navy
            text_default: "#FFFFFF".to_string(),
            selected: "#F4E04D".to_string(),      // gold
            text_selected: "#000000".to_string(),
            off_month: "#AAAAAA".to_string(),
            range_select_anchor: "#F3C03F".to_string(),
            range_select_hover: "#F9EE9F".to_string(),
        }
    }
}

/// Font sizes in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    /// Navigation buttons and column headers
    pub label: f32,
    pub label_small: f32,
    /// Date and week buttons
    pub calendar_button: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            label: 13.0,
            label_small: 11.0,
            calendar_button: 16.0,
        }
    }
}

/// Standalone window size in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 360.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("calendar.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_classic_palette() {
        let config = CalendarConfig::default();
        assert_eq!(config.seed_date, None);
        assert_eq!(config.palette.default, "#183440");
        assert_eq!(config.palette.selected, "#F4E04D");
        assert_eq!(config.fonts.calendar_button, 16.0);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "seed_date: 2024-03-15\npalette:\n  selected: \"#00AA00\"\nfonts:\n  label: 15.0\n",
        );

        let config = CalendarConfig::load(&path).unwrap();
        assert_eq!(config.seed_date, Some("2024-03-15".parse().unwrap()));
        assert_eq!(config.palette.selected, "#00AA00");
        assert_eq!(config.palette.default, "#183440");
        assert_eq!(config.fonts.label, 15.0);
        assert_eq!(config.fonts.calendar_button, 16.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = CalendarConfig::load(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(AppError::ConfigRead { .. })));
    }

    #[test]
    fn test_bad_seed_date_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "seed_date: 2024-02-30\n");

        let result = CalendarConfig::load(&path);
        assert!(matches!(result, Err(AppError::ConfigParse { .. })));
    }
}
