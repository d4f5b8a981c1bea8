use eframe::egui::{self, Color32, RichText, Ui};

use crate::anim::Ease;
use crate::projection::PROJECTIONS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – projection info, legend, easing
// ---------------------------------------------------------------------------

/// Render the left info panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Iris Scatter Plots");
    ui.label(RichText::new("Click the plot to cycle projections").small().weak());
    ui.separator();

    let record_count = match &state.dataset {
        Some(ds) => ds.len(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let projection = state.cycler.current();

    ui.strong("Projection");
    ui.label(format!(
        "{} vs {}",
        projection.x.label(),
        projection.y.label()
    ));
    ui.label(format!(
        "{} of {}  ·  {record_count} records",
        state.cycler.index() + 1,
        PROJECTIONS.len()
    ));
    if ui.button("Next projection").clicked() {
        let now = ui.input(|i| i.time);
        state.advance_projection(now);
        ui.ctx().request_repaint();
    }

    ui.separator();

    ui.strong("Species");
    if let Some(cm) = &state.color_map {
        for (label, color) in cm.legend_entries() {
            ui.label(RichText::new(label).color(color));
        }
    }

    ui.separator();

    ui.strong("Easing");
    egui::ComboBox::from_id_salt("transition_easing")
        .selected_text(state.ease.label())
        .show_ui(ui, |ui: &mut Ui| {
            for mode in Ease::ALL {
                ui.selectable_value(&mut state.ease, mode, mode.label());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} records loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open Iris dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
