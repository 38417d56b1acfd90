//! # Font Configuration
//!
//! Text style configuration for the application. The brand text on the
//! splash uses explicit per-label sizes; these styles cover the rest of the
//! UI (home screen, footer). egui's built-in fonts carry the brand weights —
//! bold and italics are per-label `RichText` attributes, not separate font
//! files.

use egui::{Context, FontFamily, FontId, TextStyle, Theme as EguiTheme};

/// Font configuration for the application
pub struct FontConfig;

impl FontConfig {
    /// Configure text styles on the egui context. Called once at startup.
    pub fn setup(ctx: &Context) {
        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.text_styles.insert(
                    TextStyle::Small,
                    FontId::new(12.0, FontFamily::Proportional),
                );
                style.text_styles.insert(
                    TextStyle::Body,
                    FontId::new(16.0, FontFamily::Proportional),
                );
                style.text_styles.insert(
                    TextStyle::Button,
                    FontId::new(16.0, FontFamily::Proportional),
                );
                style.text_styles.insert(
                    TextStyle::Heading,
                    FontId::new(30.0, FontFamily::Proportional),
                );
                style.text_styles.insert(
                    TextStyle::Monospace,
                    FontId::new(14.0, FontFamily::Monospace),
                );
            });
        }
    }
}
