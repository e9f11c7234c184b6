// src/state/dashboard_state.rs
use std::collections::HashMap;

use eframe::egui::Color32;

use crate::analysis::{distinct_values, evaluate, Outcome};
use crate::config::{Labels, Settings};
use crate::model::{Dataset, Dimension, FilterSelection};

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub dataset: &'static Dataset,
    pub title: String,
    pub labels: Labels,
    pub bar_color: Color32,

    // Selector options, first-appearance order
    pub options: HashMap<Dimension, Vec<String>>,
    pub selection: FilterSelection,

    outcome: Outcome,
    outcome_dirty: bool,
}

impl AppState {
    pub fn new(dataset: &'static Dataset, settings: &Settings) -> Self {
        let options = Dimension::ALL
            .into_iter()
            .map(|dimension| (dimension, distinct_values(dataset.records(), dimension)))
            .collect();

        Self {
            dataset,
            title: settings.display.title.clone(),
            labels: settings.labels.clone(),
            bar_color: settings.display.bar_color(),
            options,
            selection: FilterSelection::all(dataset),
            outcome: Outcome::NoData,
            outcome_dirty: true,
        }
    }

    pub fn options(&self, dimension: Dimension) -> &[String] {
        self.options.get(&dimension).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_selected(&mut self, dimension: Dimension, value: &str, selected: bool) {
        if self.selection.is_selected(dimension, value) != selected {
            self.selection.set(dimension, value, selected);
            self.outcome_dirty = true;
        }
    }

    pub fn select_all(&mut self, dimension: Dimension) {
        let options = self.options(dimension).to_vec();
        self.selection.select_all(dimension, options);
        self.outcome_dirty = true;
    }

    pub fn clear(&mut self, dimension: Dimension) {
        self.selection.clear(dimension);
        self.outcome_dirty = true;
    }

    /// Current pipeline result, recomputed only after the selection changed.
    pub fn outcome(&mut self) -> &Outcome {
        if self.outcome_dirty {
            self.outcome = evaluate(self.dataset, &self.selection);
            self.outcome_dirty = false;
        }
        &self.outcome
    }
}
