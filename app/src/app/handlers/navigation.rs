//! # Navigation Handlers
//!
//! Handlers for screen navigation. The splash view itself never navigates;
//! the shell calls [`dismiss_splash_if_ready`] as boot progress arrives.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    if state.current_screen != screen {
        tracing::info!(
            from = state.current_screen.title(),
            to = screen.title(),
            "screen change"
        );
        state.current_screen = screen;
    }
}

/// Hand off from the splash to the main screen once both the boot work and
/// the minimum hold have finished. A no-op on any other screen.
pub(crate) fn dismiss_splash_if_ready(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if state.current_screen == Screen::Splash && state.splash.ready_to_dismiss() {
        tracing::info!("splash complete, continuing to home");
        state.current_screen = Screen::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(state: AppState) -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn screen_change_updates_state() {
        let state = shared(AppState::default());
        handle_screen_change(state.clone(), Screen::Home);
        assert_eq!(state.read().current_screen, Screen::Home);
    }

    #[test]
    fn splash_stays_until_both_flags_set() {
        let state = shared(AppState::default());

        state.write().splash.hold_elapsed = true;
        dismiss_splash_if_ready(state.clone());
        assert_eq!(state.read().current_screen, Screen::Splash);

        state.write().splash.boot_complete = true;
        dismiss_splash_if_ready(state.clone());
        assert_eq!(state.read().current_screen, Screen::Home);
    }

    #[test]
    fn dismissal_is_a_noop_after_handoff() {
        let state = shared(AppState {
            current_screen: Screen::Home,
            ..AppState::default()
        });
        dismiss_splash_if_ready(state.clone());
        assert_eq!(state.read().current_screen, Screen::Home);
    }
}
