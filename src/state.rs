use std::path::Path;

use crate::anim::{Ease, Transition};
use crate::color::ColorMap;
use crate::data::loader;
use crate::data::model::IrisDataset;
use crate::projection::ProjectionCycler;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads).
    pub dataset: Option<IrisDataset>,

    /// Which attribute pair is on screen.
    pub cycler: ProjectionCycler,

    /// Species label → colour, rebuilt per dataset.
    pub color_map: Option<ColorMap>,

    /// Easing mode for dot transitions.
    pub ease: Ease,

    /// In-flight dot transition, if any.
    pub transition: Option<Transition>,

    /// Data-space position of every dot as last drawn; the snapshot source
    /// when a transition starts.
    pub displayed: Vec<[f64; 2]>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            cycler: ProjectionCycler::new(),
            color_map: None,
            ease: Ease::default(),
            transition: None,
            displayed: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: rebuild the colour map, restart the
    /// projection cycle, drop any running transition.
    pub fn set_dataset(&mut self, dataset: IrisDataset) {
        let labels = dataset.species_labels();
        self.color_map = Some(ColorMap::for_labels(labels.iter().map(String::as_str)));

        self.cycler = ProjectionCycler::new();
        let projection = self.cycler.current();
        self.displayed = dataset.records.iter().map(|r| projection.point(r)).collect();

        self.transition = None;
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// The trigger-event handler: snapshot the dots where they are, advance
    /// the cycle. Redraw is the caller's responsibility.
    pub fn advance_projection(&mut self, now: f64) {
        if self.dataset.is_none() {
            return;
        }
        self.transition = Some(Transition::new(self.displayed.clone(), now, self.ease));
        self.cycler.advance();
    }

    /// Load a dataset file, surfacing failure in the status message.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records ({:?}) from {}",
                    dataset.len(),
                    dataset.species_labels(),
                    path.display()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> IrisDataset {
        IrisDataset::from_records(vec![Record {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
            species: "setosa".to_string(),
        }])
    }

    #[test]
    fn advance_without_dataset_is_a_noop() {
        let mut state = AppState::default();
        state.advance_projection(0.0);
        assert_eq!(state.cycler.index(), 0);
        assert!(state.transition.is_none());
    }

    #[test]
    fn set_dataset_restarts_the_cycle() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.advance_projection(0.0);
        assert_eq!(state.cycler.index(), 1);

        state.set_dataset(dataset());
        assert_eq!(state.cycler.index(), 0);
        assert!(state.transition.is_none());
        // initial positions follow projection 0: (sepal_width, sepal_length)
        assert_eq!(state.displayed, vec![[3.5, 5.1]]);
    }

    #[test]
    fn advance_snapshots_displayed_positions() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.advance_projection(7.0);
        let tr = state.transition.as_ref().unwrap();
        // before the delay elapses, dots hold their snapshot position
        assert_eq!(tr.blend(0, [0.2, 1.4], 7.0), [3.5, 5.1]);
    }
}
