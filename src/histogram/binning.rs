//! Equal-width binning with percentage normalization.
//!
//! Bin membership uses half-open intervals `[edge_i, edge_i+1)`, with the
//! final bin closed on both ends so the maximum value is counted. Bar
//! heights are percentages of the sample count, so they sum to 100.

use crate::utils::error::HistogramError;
use log::debug;

/// A normalized frequency distribution
///
/// **Public** - produced from the filtered gas values, consumed by the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin boundaries; `bin_count + 1` entries, ascending
    pub edges: Vec<f64>,

    /// Per-bin percentage of the sample count; `bin_count` entries
    pub percentages: Vec<f64>,

    /// Number of samples the percentages are normalized against
    pub sample_count: usize,
}

impl Histogram {
    /// Bin samples into `bin_count` equal-width bins
    ///
    /// **Public** - third stage of the pipeline
    ///
    /// # Arguments
    /// * `samples` - Gas values of the filtered subset
    /// * `bin_count` - Number of bins (10 in the default report)
    ///
    /// # Errors
    /// * `HistogramError::EmptySamples` - nothing to bin; callers report
    ///   this as a "no data" condition rather than dividing by zero
    /// * `HistogramError::InvalidBinCount` - zero bins
    pub fn from_samples(samples: &[f64], bin_count: usize) -> Result<Self, HistogramError> {
        if bin_count == 0 {
            return Err(HistogramError::InvalidBinCount(bin_count));
        }
        if samples.is_empty() {
            return Err(HistogramError::EmptySamples);
        }

        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // A zero-variance subset still needs bins of nonzero width; widen
        // the range one unit around the value so every sample lands in the
        // middle bin.
        let (lo, hi) = if max > min {
            (min, max)
        } else {
            (min - 0.5, min + 0.5)
        };

        let width = (hi - lo) / bin_count as f64;
        let edges: Vec<f64> = (0..=bin_count).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bin_count];
        for &value in samples {
            // Half-open membership; the clamp closes the last bin at `hi`
            let index = (((value - lo) / width) as usize).min(bin_count - 1);
            counts[index] += 1;
        }

        let total = samples.len() as f64;
        let percentages: Vec<f64> = counts
            .iter()
            .map(|&count| count as f64 / total * 100.0)
            .collect();

        debug!(
            "Binned {} samples into {} bins over {:.0}..{:.0}",
            samples.len(),
            bin_count,
            lo,
            hi
        );

        Ok(Self {
            edges,
            percentages,
            sample_count: samples.len(),
        })
    }

    /// Observed value range covered by the bins
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Height of the tallest bar, in percent
    pub fn max_percentage(&self) -> f64 {
        self.percentages.iter().copied().fold(0.0, f64::max)
    }
}
