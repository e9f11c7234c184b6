// src/app.rs
use eframe::egui;

use crate::config::Settings;
use crate::model::Dataset;
use crate::state::AppState;

pub struct SalesApp {
    state: AppState,
}

impl SalesApp {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: &'static Dataset, settings: &Settings) -> Self {
        crate::ui::fonts::install(&cc.egui_ctx, settings.display.font_path.as_deref());
        Self {
            state: AppState::new(dataset, settings),
        }
    }
}

impl eframe::App for SalesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filter_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                crate::ui::sidebar::show_filter_panel(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("dashboard_scroll")
                .show(ui, |ui| {
                    crate::ui::show_dashboard(ui, &mut self.state);
                });
        });
    }
}
