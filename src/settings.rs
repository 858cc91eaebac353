use serde::{Deserialize, Serialize};

use crate::core::{Rgba, INITIAL_ZOOM, MAX_ZOOM, MIN_ZOOM};

pub const DEFAULT_SETTINGS_PATH: &str = "pixel-canvas.json";
pub const SETTINGS_PATH_ENV: &str = "PIXEL_CANVAS_SETTINGS";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Starting paint color as `#rrggbb`
    pub initial_color: String,
    /// Starting zoom, clamped to the zoom bounds
    pub initial_zoom: f32,
    /// Max seconds between two presses of a double activation
    pub double_click_secs: f64,
    /// Max pointer travel in pixels between the two presses
    pub double_click_slop: f32,
    /// When enabled the application initialises the logger at debug level.
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_color: Rgba::BLACK.to_hex(),
            initial_zoom: INITIAL_ZOOM,
            double_click_secs: 0.5,
            double_click_slop: 4.0,
            debug_logging: false,
        }
    }
}

impl Settings {
    /// Path from `PIXEL_CANVAS_SETTINGS`, else `pixel-canvas.json`
    pub fn default_path() -> String {
        std::env::var(SETTINGS_PATH_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string())
    }

    /// Load settings from `path`. A missing or empty file gives defaults;
    /// malformed JSON is an error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Parsed `initial_color`, falling back to black
    pub fn initial_color(&self) -> Rgba {
        match self.initial_color.parse() {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!(
                    "initial color '{}' is invalid ({}); using black",
                    self.initial_color,
                    err
                );
                Rgba::BLACK
            }
        }
    }

    pub fn initial_zoom(&self) -> f32 {
        if self.initial_zoom.is_finite() {
            self.initial_zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            INITIAL_ZOOM
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_content_gives_defaults() {
        assert_eq!(Settings::from_json("").unwrap(), Settings::default());
        assert_eq!(Settings::from_json("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load("/nonexistent/pixel-canvas.json").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r##"{ "initial_color": "#ff0000", "debug_logging": true }"##).unwrap();
        assert_eq!(settings.initial_color(), Rgba::rgb(255, 0, 0));
        assert!(settings.debug_logging);
        assert_eq!(settings.initial_zoom, INITIAL_ZOOM);
        assert_eq!(settings.double_click_secs, 0.5);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ initial_color: ").is_err());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let settings = Settings {
            initial_color: "not a color".into(),
            initial_zoom: 99.0,
            ..Default::default()
        };
        assert_eq!(settings.initial_color(), Rgba::BLACK);
        assert_eq!(settings.initial_zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("pixel-canvas-settings-{}.json", std::process::id()));
        let path = path.to_string_lossy().into_owned();
        let settings = Settings {
            initial_color: "#123456".into(),
            initial_zoom: 3.0,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
        let _ = std::fs::remove_file(&path);
    }
}
