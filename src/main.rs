use std::path::Path;

use eframe::egui;
use rusty_dash::app::RustyDashApp;
use rusty_dash::config::{AppConfig, CONFIG_FILE};

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE));
    log::info!("Starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Dash",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyDashApp::new(&config)))),
    )
}
