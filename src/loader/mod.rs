//! Measurement log ingestion and filtering.
//!
//! This module handles:
//! - Reading the delimited measurement log into memory
//! - Validating that the required columns are present
//! - Selecting the rows of one iteration

pub mod gas_log;

// Re-export main types
pub use gas_log::{filter_iteration, load_measurements, GasRecord};
