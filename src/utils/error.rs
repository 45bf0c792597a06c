//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a measurement log
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open measurement log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV content: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0:?}")]
    MissingColumn(String),
}

/// Errors that can occur while computing a distribution
#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("No samples to bin")]
    EmptySamples,

    #[error("Invalid bin count: {0}")]
    InvalidBinCount(usize),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to prepare drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Output directory does not exist: {0}")]
    MissingDirectory(PathBuf),
}
