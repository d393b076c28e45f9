use std::collections::BTreeSet;

use rand::rngs::StdRng;

use wavescale::color::{ColorMap, ColorToken};
use wavescale::config::Settings;
use wavescale::data::model::Dataset;
use wavescale::data::standardize::{FeatureStandardizer, standardize_in_place};
use wavescale::polar::{self, PolarAxes};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which central panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Table,
    Lines,
    Polar,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Columns ticked for standardization.
    pub selected: BTreeSet<String>,

    /// Fits applied to the dataset, most recent last.
    pub history: Vec<FeatureStandardizer>,

    /// Per-column colours for the line view.
    pub color_map: Option<ColorMap>,

    /// Polar surface the random waves are drawn on.
    pub axes: PolarAxes,

    /// Colour of the most recent wave.
    pub last_color: Option<ColorToken>,

    pub rng: StdRng,

    pub view: View,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            dataset: None,
            selected: BTreeSet::new(),
            history: Vec::new(),
            color_map: None,
            axes: PolarAxes::new(),
            last_color: None,
            rng: settings.rng(),
            view: View::default(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and reset the selection.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.color_map = Some(ColorMap::new(dataset.column_names()));
        self.selected.clear();
        self.history.clear();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Tick or untick a column.
    pub fn toggle_feature(&mut self, column: &str) {
        if !self.selected.remove(column) {
            self.selected.insert(column.to_string());
        }
    }

    pub fn select_all(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selected = ds.column_names().map(str::to_string).collect();
        }
    }

    pub fn select_none(&mut self) {
        self.selected.clear();
    }

    /// Standardize the ticked columns, in table order.
    pub fn standardize_selected(&mut self) {
        let Some(ds) = &mut self.dataset else {
            return;
        };
        let features: Vec<String> = ds
            .column_names()
            .filter(|name| self.selected.contains(*name))
            .map(str::to_string)
            .collect();
        if features.is_empty() {
            return;
        }

        match standardize_in_place(ds, &features) {
            Ok(fitted) => {
                log::info!("Standardized {features:?}");
                self.history.push(fitted);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Standardization failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Revert the most recent standardization.
    pub fn undo_standardize(&mut self) {
        let (Some(ds), Some(fitted)) = (&mut self.dataset, self.history.pop()) else {
            return;
        };
        if let Err(e) = fitted.inverse_transform(ds) {
            log::warn!("Undo failed: {e}");
            self.status_message = Some(format!("Error: {e}"));
        }
    }

    /// Draw one random wave on the polar axes.
    pub fn draw_random_wave(&mut self) -> ColorToken {
        let color = polar::plot_random_wave(&mut self.axes, &mut self.rng);
        self.last_color = Some(color);
        color
    }

    pub fn clear_waves(&mut self) {
        self.axes.clear();
        self.last_color = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_abc() -> AppState {
        let mut state = AppState::new(&Settings { seed: Some(1) });
        state.set_dataset(
            Dataset::from_columns([
                ("a", vec![1.0, 2.0, 3.0]),
                ("b", vec![4.0, 5.0, 6.0]),
                ("c", vec![7.0, 8.0, 9.0]),
            ])
            .unwrap(),
        );
        state
    }

    #[test]
    fn test_standardize_and_undo() {
        let mut state = state_with_abc();
        state.toggle_feature("a");
        state.toggle_feature("b");
        state.standardize_selected();

        let ds = state.dataset.as_ref().unwrap();
        assert!(ds.column("a").unwrap()[0] < -1.2);
        assert_eq!(ds.column("c"), Some(&[7.0, 8.0, 9.0][..]));
        assert_eq!(state.history.len(), 1);

        state.undo_standardize();
        let ds = state.dataset.as_ref().unwrap();
        assert!((ds.column("a").unwrap()[0] - 1.0).abs() < 1e-12);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let mut state = state_with_abc();
        state.select_all();
        state.select_none();
        state.standardize_selected();
        assert!(state.history.is_empty());
        assert_eq!(state.dataset.as_ref().unwrap().column("a"), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn test_waves_accumulate_and_clear() {
        let mut state = state_with_abc();
        let color = state.draw_random_wave();
        state.draw_random_wave();
        assert_eq!(state.axes.lines().len(), 2);
        assert_eq!(state.axes.lines()[0].color, color);

        state.clear_waves();
        assert!(state.axes.lines().is_empty());
        assert!(state.last_color.is_none());
    }
}
