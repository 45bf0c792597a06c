//! Normalized frequency distribution of the gas metric.

pub mod binning;

// Re-export main types
pub use binning::Histogram;
