// src/state/mod.rs
pub mod dashboard_state;

pub use dashboard_state::AppState;
