mod anim;
mod app;
mod color;
mod data;
mod projection;
mod state;
mod ui;

use app::IrisApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Petal Plot – Iris Scatter Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(IrisApp::default()))),
    )
}
