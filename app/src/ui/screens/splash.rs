//! # Splash Screen
//!
//! The branded intro screen: full-bleed background art overlaid with a
//! screen-centered stack of the logo, title, and subtitle. Static once
//! presented — no input handling, no transitions; the shell decides when to
//! move on.

use crate::app::AppState;
use crate::services::assets;
use crate::ui::layout;
use crate::ui::widgets::{artwork, branding};

/// Render the splash screen
pub fn render(ui: &mut egui::Ui, _state: &AppState) {
    let screen = ui.ctx().screen_rect();

    // Bottom layer: background art covering the overscanned frame.
    match assets::image(assets::BG_SPLASH) {
        Ok(source) => artwork::paint_cover(ui, source, layout::background_frame(screen)),
        Err(err) => tracing::debug!("background art unavailable: {err}"),
    }

    // Top layer: logo and brand text, centered on the screen.
    egui::Area::new(egui::Id::new("splash_stack"))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ui.ctx(), |ui| {
            ui.vertical_centered(|ui| {
                let (logo_box, _) = ui.allocate_exact_size(
                    egui::Vec2::splat(layout::LOGO_BOX),
                    egui::Sense::hover(),
                );
                match assets::image(assets::APP_LOGO) {
                    Ok(source) => artwork::paint_fit(ui, source, logo_box),
                    Err(err) => tracing::debug!("logo art unavailable: {err}"),
                }
                branding::render_title(ui);
                branding::render_subtitle(ui);
            });
        });
}
