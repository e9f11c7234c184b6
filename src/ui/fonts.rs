// src/ui/fonts.rs
use std::path::Path;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CUSTOM_FONT: &str = "dashboard";

/// egui's defaults with `font` placed first in both families, so its glyphs
/// win and the built-ins still cover emoji.
pub fn with_font(font: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CUSTOM_FONT.to_string(), FontData::from_owned(font));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, CUSTOM_FONT.to_string());
    }
    fonts
}

/// Installs the configured font. A missing or unreadable file keeps the
/// built-in fonts.
pub fn install(ctx: &egui::Context, path: Option<&Path>) {
    if let Some(font) = path.and_then(read_font) {
        ctx.set_fonts(with_font(font));
    }
}

fn read_font(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(font) => {
            tracing::info!(path = %path.display(), "Using custom font");
            Some(font)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Could not read font, non-Latin text may not render"
            );
            None
        }
    }
}
