//! # Branding Components
//!
//! Reusable brand text used across screens (splash, home).

use egui::{Color32, RichText};

/// Brand title line
pub const TITLE: &str = "NavigAbility Solutions";
/// Brand subtitle line
pub const SUBTITLE: &str = "Making navigation accessible";
/// Title point size
pub const TITLE_SIZE: f32 = 30.0;
/// Subtitle point size
pub const SUBTITLE_SIZE: f32 = 20.0;

/// Render the brand title: bold, white, 30pt, upright.
pub fn render_title(ui: &mut egui::Ui) {
    ui.label(
        RichText::new(TITLE)
            .size(TITLE_SIZE)
            .color(Color32::WHITE)
            .strong(),
    );
}

/// Render the brand subtitle: bold italic, white, 20pt.
pub fn render_subtitle(ui: &mut egui::Ui) {
    ui.label(
        RichText::new(SUBTITLE)
            .size(SUBTITLE_SIZE)
            .color(Color32::WHITE)
            .strong()
            .italics(),
    );
}

/// Render the version footer anchored to the bottom of the screen.
pub fn render_footer(ui: &mut egui::Ui) {
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(10.0);
        ui.label(
            RichText::new(format!("NavigAbility Desktop v{}", env!("CARGO_PKG_VERSION")))
                .size(12.0)
                .color(Color32::from_rgba_unmultiplied(128, 128, 128, 180)),
        );
    });
}
