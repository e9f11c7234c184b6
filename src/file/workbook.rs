// src/file/workbook.rs
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use super::error::LoadError;
use crate::config::ColumnSchema;
use crate::model::{Dataset, Record};

// Positions of the schema columns inside a header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    region: usize,
    segment: usize,
    shipping_method: usize,
    category: usize,
    revenue: usize,
    profit: usize,
}

impl ColumnIndex {
    fn locate(header: &[Data], schema: &ColumnSchema) -> Result<Self, LoadError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|cell| cell_text(cell) == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            region: find(&schema.region)?,
            segment: find(&schema.segment)?,
            shipping_method: find(&schema.shipping_method)?,
            category: find(&schema.category)?,
            revenue: find(&schema.revenue)?,
            profit: find(&schema.profit)?,
        })
    }
}

/// Opens `path` and converts worksheet `sheet` into a dataset.
pub fn read_dataset(path: &Path, sheet: &str, schema: &ColumnSchema) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::WorkbookNotFound(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(LoadError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| LoadError::Sheet {
            sheet: sheet.to_string(),
            source,
        })?;

    records_from_range(&range, sheet, schema).map(Dataset::new)
}

/// First row is the header; every following non-blank row becomes a record.
pub fn records_from_range(
    range: &Range<Data>,
    sheet: &str,
    schema: &ColumnSchema,
) -> Result<Vec<Record>, LoadError> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| LoadError::MissingHeader(sheet.to_string()))?;
    let index = ColumnIndex::locate(header, schema)?;

    let mut records = Vec::new();
    // Row numbers reported in errors are 1-based, header is row 1
    for (offset, row) in rows.enumerate() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let row_number = offset + 2;
        let text = |column: usize| row.get(column).map(cell_text).unwrap_or_default();
        let number = |column: usize, name: &str| {
            cell_number(row.get(column).unwrap_or(&Data::Empty)).ok_or_else(|| {
                LoadError::NotNumeric {
                    row: row_number,
                    column: name.to_string(),
                    value: row.get(column).map(cell_text).unwrap_or_default(),
                }
            })
        };

        records.push(Record {
            region: text(index.region),
            segment: text(index.segment),
            shipping_method: text(index.shipping_method),
            category: text(index.category),
            revenue: number(index.revenue, &schema.revenue)?,
            profit: number(index.profit, &schema.profit)?,
        });
    }

    Ok(records)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

// Finite values only; "NaN" or "inf" text is malformed
fn cell_number(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    value.filter(|v: &f64| v.is_finite())
}
