use std::path::Path;

use eframe::egui;
use pangan_dashboard::app::PanganApp;
use pangan_dashboard::config::{DashboardConfig, CONFIG_FILE};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Regional Food Price Dashboard",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the illustration.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PanganApp::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
