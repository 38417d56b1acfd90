//! # Application State Types
//!
//! All state-related types for the application: screens, splash progress,
//! and settings.

use crate::ui::theme::ThemeConfig;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Branded splash screen shown while the application boots
    Splash,
    /// Main screen shown once boot has completed
    Home,
}

impl Screen {
    /// Get all screens in presentation order
    pub fn all() -> &'static [Screen] {
        &[Screen::Splash, Screen::Home]
    }

    /// Get screen title for window/log display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Splash => "Welcome",
            Screen::Home => "NavigAbility",
        }
    }
}

/// Splash dismissal progress.
///
/// The splash is dismissed only when both flags are set: the boot work has
/// finished *and* the minimum hold has elapsed. Either alone keeps the
/// splash on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplashState {
    /// Minimum display time has elapsed
    pub hold_elapsed: bool,
    /// Startup work (theme load) has completed
    pub boot_complete: bool,
}

impl SplashState {
    /// Whether the shell may hand off to the main screen.
    pub fn ready_to_dismiss(&self) -> bool {
        self.hold_elapsed && self.boot_complete
    }
}

/// Settings sub-state
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsState {
    /// Active theme palette
    pub theme_config: ThemeConfig,
}

/// Top-level application state.
///
/// Shared across threads as `Arc<RwLock<AppState>>`; the UI thread clones a
/// snapshot per frame and background tasks write through handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Screen currently being rendered
    pub current_screen: Screen,
    /// Splash dismissal progress
    pub splash: SplashState,
    /// Settings sub-state
    pub settings: SettingsState,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            current_screen: Screen::Splash,
            splash: SplashState::default(),
            settings: SettingsState {
                theme_config: ThemeConfig::default(),
            },
        }
    }
}
