use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Plot, PlotBounds, PlotPoints, Points};

use crate::data::model::Domain;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

const POINT_RADIUS: f32 = 4.0;
/// Fraction of the domain span added on each side so edge dots stay visible.
const DOMAIN_PAD: f64 = 0.05;

/// Render the scatter plot for the active projection. Clicking the plot is
/// the trigger event that advances the cycle.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to view the plot  (File → Open…)");
        });
        return;
    };

    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Dataset contains no records");
        });
        return;
    }

    let now = ui.input(|i| i.time);
    let projection = state.cycler.current();
    let x_domain = projection.x_domain(&dataset.bounds);
    let y_domain = projection.y_domain(&dataset.bounds);
    let x_label = projection.x.label();
    let y_label = projection.y.label();

    // Where every dot sits this frame: the projection position, or a blend
    // from the previous one while a transition runs.
    let displayed: Vec<[f64; 2]> = dataset
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let target = projection.point(record);
            match &state.transition {
                Some(tr) => tr.blend(i, target, now),
                None => target,
            }
        })
        .collect();

    // One series per species so the legend and colours line up.
    let mut grouped: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for (record, &pos) in dataset.records.iter().zip(&displayed) {
        grouped.entry(record.species.as_str()).or_default().push(pos);
    }
    let series: Vec<(String, Color32, Vec<[f64; 2]>)> = grouped
        .into_iter()
        .map(|(label, points)| {
            let color = state
                .color_map
                .as_ref()
                .map(|cm| cm.color_for(label))
                .unwrap_or(Color32::GRAY);
            (label.to_string(), color, points)
        })
        .collect();

    let bounds = padded_bounds(x_domain, y_domain);

    let response = Plot::new("iris_plot")
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            // Axes follow the projection's cached domains, not the data.
            plot_ui.set_plot_bounds(bounds);
            for (label, color, points) in &series {
                let plot_points: PlotPoints = points.iter().copied().collect();
                plot_ui.points(
                    Points::new(plot_points)
                        .name(label)
                        .color(*color)
                        .radius(POINT_RADIUS),
                );
            }
        });

    state.displayed = displayed;

    if let Some(tr) = &state.transition {
        if tr.is_finished(now) {
            state.transition = None;
        } else {
            ui.ctx().request_repaint();
        }
    }

    if response.response.clicked() {
        state.advance_projection(now);
        ui.ctx().request_repaint();
    }
}

fn padded_bounds(x: Domain, y: Domain) -> PlotBounds {
    let dx = (x.max - x.min) * DOMAIN_PAD;
    let dy = (y.max - y.min) * DOMAIN_PAD;
    PlotBounds::from_min_max([x.min - dx, y.min - dy], [x.max + dx, y.max + dy])
}
