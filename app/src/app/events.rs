//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! main thread.

use crate::ui::theme::ThemeConfig;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Startup work finished; carries the theme loaded from disk
    BootCompleted(ThemeConfig),
    /// Minimum splash display time elapsed
    SplashHoldElapsed,
}
