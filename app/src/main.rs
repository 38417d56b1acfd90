//! NavigAbility Desktop entry point

use navigability::app::NavigAbilityApp;
use navigability::debug;
use navigability::ui::fonts::FontConfig;

fn main() -> eframe::Result<()> {
    // Keep the appender guard alive for the whole process.
    let _log_guard = debug::logger::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting NavigAbility desktop");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("NavigAbility Solutions")
            .with_inner_size([390.0, 844.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "navigability-desktop",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            FontConfig::setup(&cc.egui_ctx);
            Ok(Box::new(NavigAbilityApp::new(cc)))
        }),
    )
}
