//! Figure rendering and annotation.
//!
//! This module handles:
//! - Chart configuration (size, labels, color, annotation)
//! - Drawing the histogram bars onto a plotters backend
//! - The integer tick formatter and the sample-size annotation
//! - PNG and SVG export sharing one drawing routine

pub mod config;
pub mod renderer;

// Re-export main types
pub use config::ChartConfig;
pub use renderer::{format_tick, render_png, render_svg};
