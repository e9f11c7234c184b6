// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod file;
mod model;
mod state;
mod ui;

use crate::app::SalesApp;
use crate::config::Settings;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load()?;

    // The window never opens without data
    let dataset = file::load(&settings.workbook, &settings.columns)
        .context("Failed to load sales data")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(&settings.display.title),
        ..Default::default()
    };

    let title = settings.display.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(SalesApp::new(cc, dataset, &settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
