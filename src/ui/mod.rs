// src/ui/mod.rs
use eframe::egui;

use crate::analysis::Outcome;
use crate::state::AppState;

pub mod charts;
pub mod fonts;
pub mod kpis;
pub mod sidebar;

pub fn show_dashboard(ui: &mut egui::Ui, state: &mut AppState) {
    let title = state.title.clone();
    let labels = state.labels.clone();
    let color = state.bar_color;
    let total_rows = state.dataset.len();

    ui.heading(egui::RichText::new(format!("📊 {}", title)).size(28.0));
    ui.add_space(12.0);

    let summary = match state.outcome() {
        Outcome::NoData => {
            ui.colored_label(
                egui::Color32::from_rgb(200, 140, 0),
                format!("⚠ {}", labels.no_data),
            );
            return;
        }
        Outcome::Ready(summary) => summary.clone(),
    };

    kpis::show_kpi_row(ui, &summary.kpis, &labels);
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        charts::show_region_chart(&mut columns[0], &labels.region_chart, &summary.by_region, color);
        charts::show_category_chart(&mut columns[1], &labels.category_chart, &summary.by_category, color);
    });

    ui.add_space(8.0);
    ui.label(format!("{} / {} {}", summary.row_count, total_rows, labels.row_count));
}
