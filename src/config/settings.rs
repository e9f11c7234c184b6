// src/config/settings.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui::Color32;
use serde::Deserialize;

use crate::model::Dimension;

const APP_DIR: &str = "sales-dashboard";
const LOCAL_CONFIG: &str = "config/dashboard";
const ENV_PREFIX: &str = "SALES_DASHBOARD";

pub const DEFAULT_BAR_COLOR: Color32 = Color32::from_rgb(0x00, 0x83, 0xB8);

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub workbook: WorkbookSettings,
    pub columns: ColumnSchema,
    pub display: DisplaySettings,
    pub labels: Labels,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkbookSettings {
    pub path: PathBuf,
    pub sheet: String,
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/superstore_tw.xlsx"),
            sheet: "訂單".to_string(),
        }
    }
}

/// Header names of the columns the dashboard reads. Other columns are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColumnSchema {
    pub region: String,
    pub segment: String,
    pub shipping_method: String,
    pub category: String,
    pub revenue: String,
    pub profit: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            region: "區域".to_string(),
            segment: "細分".to_string(),
            shipping_method: "郵寄方式".to_string(),
            category: "類別".to_string(),
            revenue: "銷售額".to_string(),
            profit: "利潤".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    pub title: String,
    pub bar_color: String,
    /// TTF/OTF file added in front of egui's built-in fonts. The built-ins
    /// carry no CJK glyphs.
    pub font_path: Option<PathBuf>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title: "銷售儀表板".to_string(),
            bar_color: "#0083B8".to_string(),
            font_path: Some(PathBuf::from("data/NotoSansTC-Regular.otf")),
        }
    }
}

/// User-facing text of the dashboard.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Labels {
    pub filters: String,
    pub region: String,
    pub segment: String,
    pub shipping_method: String,
    pub select_all: String,
    pub select_none: String,
    pub total_sales: String,
    pub average_sales: String,
    pub average_profit: String,
    pub net_margin: String,
    pub not_available: String,
    pub region_chart: String,
    pub category_chart: String,
    pub no_data: String,
    pub row_count: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            filters: "資料篩選".to_string(),
            region: "選取區域:".to_string(),
            segment: "選取客戶型態:".to_string(),
            shipping_method: "選取郵寄方式:".to_string(),
            select_all: "全選".to_string(),
            select_none: "清除".to_string(),
            total_sales: "總銷售額:".to_string(),
            average_sales: "平均銷售額:".to_string(),
            average_profit: "平均獲利:".to_string(),
            net_margin: "淨利率(%):".to_string(),
            not_available: "n/a".to_string(),
            region_chart: "區域銷售統計圖".to_string(),
            category_chart: "類別銷售統計圖".to_string(),
            no_data: "目前沒有選取任何資料!".to_string(),
            row_count: "筆資料".to_string(),
        }
    }
}

impl Labels {
    pub fn dimension(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Region => &self.region,
            Dimension::Segment => &self.segment,
            Dimension::ShippingMethod => &self.shipping_method,
        }
    }
}

impl DisplaySettings {
    pub fn bar_color(&self) -> Color32 {
        parse_hex_color(&self.bar_color).unwrap_or_else(|| {
            tracing::warn!(value = %self.bar_color, "Invalid bar color, using default");
            DEFAULT_BAR_COLOR
        })
    }
}

impl Settings {
    /// Defaults, then the user config dir, then `config/dashboard.toml`, then
    /// `SALES_DASHBOARD_*` environment variables.
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(dir) = dirs::config_dir() {
            let user_file = dir.join(APP_DIR).join("dashboard");
            builder = builder.add_source(
                config::File::with_name(&user_file.to_string_lossy()).required(false),
            );
        }

        let settings = builder
            .add_source(config::File::with_name(LOCAL_CONFIG).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read dashboard configuration")?;

        settings
            .try_deserialize()
            .context("Failed to parse dashboard configuration")
    }

    /// Reads a single required config file, no other layers.
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Failed to parse configuration from {}", path.display()))
    }
}

/// Parses `#RRGGBB` (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Option<Color32> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}
