//! # Home Screen
//!
//! Minimal post-splash landing. Navigation tooling lives in the companion
//! mobile app; the desktop home currently carries the brand and version.

use crate::app::AppState;
use crate::ui::widgets::branding;

/// Render the home screen
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let colors = state.settings.theme_config.to_colors();

    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        branding::render_title(ui);
        ui.add_space(4.0);
        branding::render_subtitle(ui);
        ui.add_space(32.0);
        ui.label(
            egui::RichText::new("Accessible route planning is coming to desktop.")
                .color(colors.text_secondary),
        );
    });

    branding::render_footer(ui);
}
