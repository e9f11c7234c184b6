// src/file/mod.rs
pub mod cache;
pub mod error;
pub mod workbook;

pub use cache::load;
