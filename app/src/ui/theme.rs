//! # GUI Theme
//!
//! NavigAbility brand palette for egui: deep navy background, white text,
//! teal accent. The palette persists as JSON so the installed app can be
//! re-skinned without a rebuild.

use egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::Result;

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Deep navy page background
    pub background: [u8; 3],
    /// Primary text (brand white)
    pub text: [u8; 3],
    /// Secondary text (muted blue-gray)
    pub text_secondary: [u8; 3],
    /// Brand accent (compass teal)
    pub accent: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [10, 24, 56],
            text: [255, 255, 255],
            text_secondary: [170, 180, 195],
            accent: [64, 200, 180],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file.
    ///
    /// A missing file is not an error: defaults are returned so a fresh
    /// install starts with the brand palette.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save theme configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Convert to ready-to-use egui colors
    pub fn to_colors(&self) -> NavColors {
        NavColors {
            background: rgb(self.background),
            text: rgb(self.text),
            text_secondary: rgb(self.text_secondary),
            accent: rgb(self.accent),
        }
    }
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Resolved egui colors for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavColors {
    pub background: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
}

impl NavColors {
    /// Install the palette into the egui context visuals.
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.override_text_color = Some(self.text);
        visuals.hyperlink_color = self.accent;
        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_uses_brand_white_text() {
        let colors = ThemeConfig::default().to_colors();
        assert_eq!(colors.text, Color32::WHITE);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ThemeConfig {
            background: [1, 2, 3],
            text: [4, 5, 6],
            text_secondary: [7, 8, 9],
            accent: [10, 11, 12],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = Path::new("/nonexistent/navigability-theme-test.json");
        let config = ThemeConfig::load_from_file(path).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn save_then_load_preserves_palette() {
        let mut path = std::env::temp_dir();
        path.push(format!("navigability-theme-{}.json", std::process::id()));

        let mut config = ThemeConfig::default();
        config.accent = [200, 100, 50];
        config.save_to_file(&path).unwrap();

        let loaded = ThemeConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut path = std::env::temp_dir();
        path.push(format!("navigability-theme-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();

        let result = ThemeConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
