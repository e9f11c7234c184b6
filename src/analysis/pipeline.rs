// src/analysis/pipeline.rs
use super::charts::{by_category, by_region, Series};
use super::filter::filter;
use super::kpi::{aggregate, Kpis};
use crate::model::{Dataset, FilterSelection};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub row_count: usize,
    pub kpis: Kpis,
    pub by_region: Series,
    pub by_category: Series,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The selection matched no records; nothing downstream was computed.
    NoData,
    Ready(Summary),
}

pub fn evaluate(dataset: &Dataset, selection: &FilterSelection) -> Outcome {
    let view = filter(dataset.records(), selection);

    let Some(kpis) = aggregate(&view) else {
        tracing::debug!("Selection matched no records");
        return Outcome::NoData;
    };

    tracing::debug!(rows = view.len(), "Recomputed dashboard");
    Outcome::Ready(Summary {
        row_count: view.len(),
        kpis,
        by_region: by_region(&view),
        by_category: by_category(&view),
    })
}
