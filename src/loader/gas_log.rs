//! CSV measurement log reader.
//!
//! One row per transaction attempt. The two columns this tool cares about
//! are `Iteration` and `Gas Used`; any other columns are ignored.

use crate::utils::config::{GAS_USED_COLUMN, ITERATION_COLUMN};
use crate::utils::error::LoadError;
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One measurement row from the log
///
/// **Public** - produced by the loader, consumed by the filter
#[derive(Debug, Clone, Deserialize)]
pub struct GasRecord {
    /// Batch label grouping repeated attempts
    // Renames must stay in sync with the header constants in utils::config.
    #[serde(rename = "Iteration")]
    pub iteration: u32,

    /// Gas consumed by this attempt
    #[serde(rename = "Gas Used")]
    pub gas_used: f64,
}

/// Load a measurement log into memory
///
/// **Public** - first stage of the pipeline
///
/// # Arguments
/// * `path` - Path to a CSV file with a header row
///
/// # Returns
/// All rows of the log, in file order
///
/// # Errors
/// * `LoadError::Open` - file missing or unreadable (names the path)
/// * `LoadError::MissingColumn` - header lacks `Iteration` or `Gas Used`
/// * `LoadError::Csv` - malformed delimited content
pub fn load_measurements(path: impl AsRef<Path>) -> Result<Vec<GasRecord>, LoadError> {
    let path = path.as_ref();

    info!("Loading measurement log: {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    // Check the header up front so the error names the column, instead of
    // surfacing as a deserialization failure on the first row.
    let headers = reader.headers()?.clone();
    for required in [ITERATION_COLUMN, GAS_USED_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: GasRecord = row?;
        records.push(record);
    }

    debug!("Loaded {} measurement rows", records.len());

    Ok(records)
}

/// Select the gas values of the rows matching one iteration
///
/// **Public** - second stage of the pipeline
///
/// An empty result is valid: it means the target iteration does not appear
/// in the log, and the caller decides how to report that.
pub fn filter_iteration(records: &[GasRecord], iteration: u32) -> Vec<f64> {
    let samples: Vec<f64> = records
        .iter()
        .filter(|r| r.iteration == iteration)
        .map(|r| r.gas_used)
        .collect();

    debug!(
        "{} of {} rows match iteration {}",
        samples.len(),
        records.len(),
        iteration
    );

    samples
}
