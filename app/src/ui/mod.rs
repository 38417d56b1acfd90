//! # GUI Rendering Framework
//!
//! Orchestrates the per-frame rendering pipeline: theme application, screen
//! dispatch, and the repaint scheduling that keeps the timed splash
//! hand-off moving without user input.

pub mod fonts;
pub mod layout;
pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Screen};

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Snapshot the state so rendering happens without holding the lock.
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => {
            // Lock is held by a handler, skip this frame.
            return;
        }
    };

    let colors = state.settings.theme_config.to_colors();
    colors.apply(ctx);

    if state.current_screen == Screen::Splash {
        // The splash dismissal arrives over the event channel; keep frames
        // coming so the hand-off is picked up promptly.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors.background))
        .show(ctx, |ui| match state.current_screen {
            Screen::Splash => screens::splash::render(ui, &state),
            Screen::Home => screens::home::render(ui, &state),
        });
}
