//! Output path checks for the persisted figures.
//!
//! Both destinations are validated before any rendering starts, so a bad
//! path aborts with no partially written report.

pub mod paths;

// Re-export main functions
pub use paths::validate_output_path;
