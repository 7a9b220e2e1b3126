mod app;
mod color;
mod config;
mod data;
mod error;
mod i18n;
mod state;
mod trend;
mod ui;

use app::SeaLevelApp;
use config::Settings;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let settings = Settings::from_env();
    log::info!(
        "Starting with data source {} (recent trend from {}, language {})",
        settings.source,
        settings.recent_from,
        settings.language.code()
    );
    let title = settings.language.strings().window_title;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::new(SeaLevelApp::new(settings)))),
    )
}
