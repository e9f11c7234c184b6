// src/ui/sidebar.rs
use eframe::egui;

use crate::model::Dimension;
use crate::state::AppState;

pub fn show_filter_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(state.labels.filters.as_str());
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_source("filters_scroll")
        .show(ui, |ui| {
            for dimension in Dimension::ALL {
                show_multiselect(ui, state, dimension);
                ui.add_space(8.0);
            }
        });
}

fn show_multiselect(ui: &mut egui::Ui, state: &mut AppState, dimension: Dimension) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.strong(state.labels.dimension(dimension));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button(state.labels.select_none.as_str()).clicked() {
                    state.clear(dimension);
                }
                if ui.small_button(state.labels.select_all.as_str()).clicked() {
                    state.select_all(dimension);
                }
            });
        });

        let options = state.options(dimension).to_vec();
        for value in &options {
            let mut selected = state.selection.is_selected(dimension, value);
            if ui.checkbox(&mut selected, value.as_str()).changed() {
                tracing::debug!(?dimension, %value, selected, "Filter changed");
                state.set_selected(dimension, value, selected);
            }
        }
    });
}
