//! # Settings Handlers
//!
//! Handlers for theme configuration persistence. A missing config file loads
//! as defaults; a malformed one is logged and replaced by defaults.

use crate::app::state::AppState;
use crate::core::error::Result;
use crate::ui::theme::ThemeConfig;
use parking_lot::RwLock;
use std::sync::Arc;

/// Get default config file path
pub fn get_config_path() -> std::path::PathBuf {
    std::path::PathBuf::from("./navigability-config.json")
}

/// Load settings from file
pub fn load_settings() -> ThemeConfig {
    let path = get_config_path();
    match ThemeConfig::load_from_file(&path) {
        Ok(config) => {
            tracing::info!("loaded theme configuration from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("failed to load theme config from {:?}: {}. Using defaults.", path, e);
            ThemeConfig::default()
        }
    }
}

/// Save settings to file
pub fn save_settings(config: &ThemeConfig) -> Result<()> {
    let path = get_config_path();
    config.save_to_file(&path)?;
    tracing::info!("saved theme configuration to {:?}", path);
    Ok(())
}

/// Apply a freshly loaded theme to the shared state.
///
/// Internal handler function - called from the event handler when the boot
/// task reports [`crate::app::AppEvent::BootCompleted`].
pub(crate) fn handle_theme_loaded(state: Arc<RwLock<AppState>>, config: ThemeConfig) {
    let mut state = state.write();
    state.settings.theme_config = config;
}
