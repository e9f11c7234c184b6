// src/ui/charts.rs
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use crate::analysis::Series;

const CHART_HEIGHT: f32 = 280.0;

/// Vertical bars, one per region.
pub fn show_region_chart(ui: &mut egui::Ui, title: &str, series: &Series, color: egui::Color32) {
    let names = group_names(series);
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading(title);
            Plot::new("sales_by_region")
                .height(CHART_HEIGHT)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show_background(false)
                .include_y(0.0)
                .show_grid([true, false])
                .x_axis_formatter(move |value, _, _| tick_label(&names, value))
                .show(ui, |plot_ui| {
                    let chart = BarChart::new(bars(series, color))
                        .color(color)
                        .name("Sales");
                    plot_ui.bar_chart(chart);
                });
            show_series_table(ui, "region_table", series);
        });
    });
}

/// Horizontal bars, one per category, smallest first.
pub fn show_category_chart(ui: &mut egui::Ui, title: &str, series: &Series, color: egui::Color32) {
    let names = group_names(series);
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading(title);
            Plot::new("sales_by_category")
                .height(CHART_HEIGHT)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show_background(false)
                .include_x(0.0)
                .show_grid([false, true])
                .y_axis_formatter(move |value, _, _| tick_label(&names, value))
                .show(ui, |plot_ui| {
                    let chart = BarChart::new(bars(series, color))
                        .color(color)
                        .name("Sales")
                        .horizontal();
                    plot_ui.bar_chart(chart);
                });
            show_series_table(ui, "category_table", series);
        });
    });
}

fn bars(series: &Series, color: egui::Color32) -> Vec<Bar> {
    series
        .iter()
        .enumerate()
        .map(|(i, (name, total))| {
            Bar::new(i as f64, *total)
                .name(name)
                .width(0.7)
                .fill(color)
        })
        .collect()
}

fn group_names(series: &Series) -> Vec<String> {
    series.iter().map(|(name, _)| name.clone()).collect()
}

/// Group name for a tick sitting on a bar position, blank elsewhere.
fn tick_label(names: &[String], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    names.get(index as usize).cloned().unwrap_or_default()
}

fn show_series_table(ui: &mut egui::Ui, id: &str, series: &Series) {
    egui::Grid::new(id)
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (name, total) in series {
                ui.label(name.as_str());
                ui.label(format!("{:.0}", total));
                ui.end_row();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_label_maps_bar_positions_to_names() {
        let series = vec![("East".to_string(), 10.0), ("North".to_string(), 20.0)];
        let names = group_names(&series);

        assert_eq!(tick_label(&names, 0.0), "East");
        assert_eq!(tick_label(&names, 1.0), "North");
        assert_eq!(tick_label(&names, 0.5), "");
        assert_eq!(tick_label(&names, 2.0), "");
        assert_eq!(tick_label(&names, -1.0), "");
    }
}
