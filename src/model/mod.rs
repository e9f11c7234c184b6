// src/model/mod.rs
pub mod record;
pub mod selection;

// Re-export commonly used types
pub use record::{Record, Dataset, Dimension};
pub use selection::FilterSelection;
