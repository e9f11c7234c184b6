// src/analysis/mod.rs
pub mod charts;
pub mod filter;
pub mod kpi;
pub mod pipeline;

// Re-export commonly used types
pub use charts::Series;
pub use filter::distinct_values;
pub use kpi::Kpis;
pub use pipeline::{evaluate, Outcome};
