#![warn(clippy::all, rust_2018_idioms)]

use sketchpad::app::APP_NAME;
use sketchpad::{SketchpadApp, SketchpadConfig};

const CONFIG_PATH: &str = "sketchpad.json";

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SketchpadConfig::load_or_default(CONFIG_PATH);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.display_size[0] + 280.0, config.display_size[1] + 60.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchpadApp::new(cc, config)))),
    )
}
