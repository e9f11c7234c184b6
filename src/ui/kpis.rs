// src/ui/kpis.rs
use eframe::egui;

use crate::analysis::Kpis;
use crate::config::Labels;

pub fn show_kpi_row(ui: &mut egui::Ui, kpis: &Kpis, labels: &Labels) {
    let margin = kpis
        .net_margin_pct
        .map(|m| format!("{:.2}", m))
        .unwrap_or_else(|| labels.not_available.clone());

    let tiles = [
        (&labels.total_sales, kpis.total_sales.to_string()),
        (&labels.average_sales, format!("{:.1}", kpis.average_sales)),
        (&labels.average_profit, format!("{:.1}", kpis.average_profit)),
        (&labels.net_margin, margin),
    ];

    ui.columns(tiles.len(), |columns| {
        for (column, (label, value)) in columns.iter_mut().zip(tiles.iter()) {
            column.vertical(|ui| {
                ui.label(egui::RichText::new(label.as_str()).size(16.0));
                ui.label(egui::RichText::new(value).size(24.0).strong());
            });
        }
    });
}
