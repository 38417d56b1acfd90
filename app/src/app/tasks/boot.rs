//! # Boot Tasks
//!
//! Startup work performed behind the splash screen, plus the minimum-hold
//! timer that keeps the splash from flashing past on a fast machine.

use crate::app::events::AppEvent;
use crate::app::handlers::settings;
use crate::utils::runtime::RUNTIME;
use async_channel::Sender;
use std::time::Duration;

/// Minimum time the splash stays on screen.
pub const MIN_SPLASH_HOLD: Duration = Duration::from_millis(1500);

/// Spawn the boot task and the splash hold timer.
pub fn spawn(event_tx: Sender<AppEvent>) {
    let hold_tx = event_tx.clone();
    RUNTIME.spawn(async move {
        hold_splash(hold_tx).await;
    });
    RUNTIME.spawn(async move {
        run_boot(event_tx).await;
    });
}

/// Perform startup work and report completion.
///
/// The only boot work today is loading the theme configuration from disk;
/// the load is synchronous file IO, small enough to run inline here.
async fn run_boot(event_tx: Sender<AppEvent>) {
    let theme = settings::load_settings();
    tracing::debug!("boot work complete");
    if event_tx.send(AppEvent::BootCompleted(theme)).await.is_err() {
        tracing::warn!("boot finished after the app shut down");
    }
}

/// Report once the minimum splash display time has elapsed.
async fn hold_splash(event_tx: Sender<AppEvent>) {
    tokio::time::sleep(MIN_SPLASH_HOLD).await;
    if event_tx.send(AppEvent::SplashHoldElapsed).await.is_err() {
        tracing::warn!("splash hold timer fired after the app shut down");
    }
}
