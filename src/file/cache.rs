// src/file/cache.rs
//
// Process-wide dataset. Filled once by `load`; there is no reload path.
use once_cell::sync::OnceCell;

use super::error::LoadError;
use super::workbook::read_dataset;
use crate::config::{ColumnSchema, WorkbookSettings};
use crate::model::Dataset;

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// Reads the configured worksheet on first call; later calls return the
/// cached dataset without touching the file.
pub fn load(workbook: &WorkbookSettings, columns: &ColumnSchema) -> Result<&'static Dataset, LoadError> {
    DATASET.get_or_try_init(|| {
        tracing::info!(
            path = %workbook.path.display(),
            sheet = %workbook.sheet,
            "Loading sales workbook"
        );
        let dataset = read_dataset(&workbook.path, &workbook.sheet, columns)?;
        tracing::info!(records = dataset.len(), "Sales workbook loaded");
        Ok(dataset)
    })
}
