mod app;
mod chart;
mod color;
mod config;
mod data;
mod layout;
mod state;
mod tooltip;
mod ui;

use app::LangTrendsApp;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_env();
    // The one suspension point: the data is in memory before the first frame.
    let state = AppState::load(&config.data_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Language Trends – Search Interest",
        options,
        Box::new(|_cc| Ok(Box::new(LangTrendsApp::new(state)))),
    )
}
