//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, background
//! tasks, and application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               Main Thread (egui)             │
//! │  App (orchestrator)                          │
//! │  - on_tick()      - drains the event channel │
//! │  - handle_event() - applies task results     │
//! │  State: Arc<RwLock<AppState>>                │
//! └──────────────────────┬───────────────────────┘
//!                        │ async_channel (unbounded)
//! ┌──────────────────────▼───────────────────────┐
//! │          Background Tasks (Tokio)            │
//! │  - boot work (theme load)                    │
//! │  - splash minimum-hold timer                 │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Locks on the shared state are held briefly and never across rendering:
//! the UI clones a snapshot per frame, and handlers write through short
//! exclusive locks.
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types
//! - [`events`]: Event enum for async communication
//! - [`handlers`]: State mutation handlers
//! - [`tasks`]: Background tasks

mod events;
pub mod handlers;
mod state;
pub mod tasks;

pub use events::AppEvent;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

/// Main application orchestrator.
///
/// Owns the shared state and the event channel. Background tasks hold a
/// clone of `event_tx`; the UI thread drains `event_rx` once per frame via
/// [`App::on_tick`].
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender for async task results (cloned into tasks).
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance and kick off the boot tasks.
    ///
    /// Initial state presents [`Screen::Splash`]; the boot task and the
    /// splash hold timer are spawned immediately and will drive the
    /// hand-off to [`Screen::Home`].
    pub fn new() -> Self {
        let (event_tx, event_rx) = unbounded();
        let state = Arc::new(RwLock::new(AppState::default()));

        tasks::boot::spawn(event_tx.clone());

        Self {
            state,
            event_rx,
            event_tx,
        }
    }

    /// Process pending async events. Non-blocking; called every frame.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply one async task result to the shared state.
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::BootCompleted(theme) => {
                handlers::settings::handle_theme_loaded(self.state.clone(), theme);
                self.state.write().splash.boot_complete = true;
                handlers::navigation::dismiss_splash_if_ready(self.state.clone());
            }
            AppEvent::SplashHoldElapsed => {
                self.state.write().splash.hold_elapsed = true;
                handlers::navigation::dismiss_splash_if_ready(self.state.clone());
            }
        }
    }

    /// Change the current screen.
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }

    /// Sender half of the event channel, for spawning additional tasks.
    pub fn event_sender(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// eframe bridge: ticks the orchestrator and renders the current screen.
pub struct NavigAbilityApp {
    app: App,
}

impl NavigAbilityApp {
    /// Create the eframe application. Image loaders and fonts are installed
    /// by the caller on the creation context before this runs the first
    /// frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self { app: App::new() }
    }
}

impl eframe::App for NavigAbilityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        crate::ui::render(ctx, &mut self.app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeConfig;

    #[test]
    fn boot_and_hold_events_dismiss_splash() {
        let mut app = App::new();

        app.handle_event(AppEvent::SplashHoldElapsed);
        assert_eq!(app.state.read().current_screen, Screen::Splash);

        app.handle_event(AppEvent::BootCompleted(ThemeConfig::default()));
        assert_eq!(app.state.read().current_screen, Screen::Home);
    }

    #[test]
    fn boot_event_applies_loaded_theme() {
        let mut app = App::new();
        let mut theme = ThemeConfig::default();
        theme.accent = [9, 9, 9];

        app.handle_event(AppEvent::BootCompleted(theme.clone()));
        assert_eq!(app.state.read().settings.theme_config, theme);
        assert!(app.state.read().splash.boot_complete);
    }
}
