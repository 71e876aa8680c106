// main.rs - Native window for Conway's Game of Life

use eframe::egui;
use log::info;

mod canvas;
mod ui;

use conway::Config;
use ui::GridApp;

fn main() -> Result<(), eframe::Error> {
    if let Err(err) = simple_logger::init_with_level(log::Level::Info) {
        eprintln!("logging disabled: {err}");
    }
    info!("Starting grid_display v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::default();
    let window_size = [
        config.surface.width as f32 + 40.0,
        config.surface.height as f32 + 140.0,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GridApp::new(config))),
    )
}
