mod app;
mod state;
mod ui;

use anyhow::anyhow;
use app::WaveScaleApp;
use eframe::egui;
use wavescale::config::Settings;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::from_env()?;
    if let Some(seed) = settings.seed {
        log::info!("Using RNG seed {seed}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "WaveScale – Standardizer & Polar Waves",
        options,
        Box::new(move |_cc| Ok(Box::new(WaveScaleApp::new(&settings)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
