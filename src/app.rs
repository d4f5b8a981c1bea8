use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

/// Default dataset location, relative to the working directory. Read once at
/// startup; File → Open… can load another file later.
const DEFAULT_DATASET: &str = "data/iris.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IrisApp {
    pub state: AppState,
}

impl Default for IrisApp {
    fn default() -> Self {
        let mut state = AppState::default();
        let path = Path::new(DEFAULT_DATASET);
        if path.exists() {
            state.load_path(path);
        } else {
            log::warn!("default dataset {DEFAULT_DATASET} not found");
            state.status_message =
                Some(format!("{DEFAULT_DATASET} not found, use File → Open…"));
        }
        Self { state }
    }
}

impl eframe::App for IrisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: projection info and legend ----
        egui::SidePanel::left("info_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: scatter plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &mut self.state);
        });
    }
}
