// main.rs - Conway's Game of Life window
// Space starts/stops, R reseeds, C cycles the cell colour

use eframe::egui;

use conway::rng::LifeRng;
use conway::{LifeConfig, Session};

mod ui;

use ui::LifeApp;

const TITLE: &str = "Conway's Game of Life";

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LifeConfig::default();

    // No board, nothing to show.
    let session = match Session::new(config, LifeRng::from_clock()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("cannot start simulation: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(session))),
    )
}
