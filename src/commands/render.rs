//! Render command implementation.
//!
//! The render command:
//! 1. Loads the measurement log
//! 2. Filters the target iteration
//! 3. Computes the normalized distribution
//! 4. Validates both output paths
//! 5. Renders and persists the PNG and SVG figures

use crate::chart::{render_png, render_svg, ChartConfig};
use crate::histogram::Histogram;
use crate::loader::{filter_iteration, load_measurements};
use crate::output::validate_output_path;
use crate::utils::config::{DEFAULT_BIN_COUNT, DEFAULT_FIGURE_SIZE, DEFAULT_ITERATION};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Path to the measurement CSV
    pub input: PathBuf,

    /// Iteration to select
    pub iteration: u32,

    /// Number of equal-width bins
    pub bins: usize,

    /// Output path for the PNG figure
    pub output_png: PathBuf,

    /// Output path for the SVG figure
    pub output_svg: PathBuf,

    /// Optional figure title
    pub title: Option<String>,

    /// Horizontal axis label
    pub x_label: String,

    /// Vertical axis label
    pub y_label: String,

    /// Optional annotation template ("{count}" expands to the row count)
    pub annotation: Option<String>,

    /// Square figure edge in pixels
    pub size: u32,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            iteration: DEFAULT_ITERATION,
            bins: DEFAULT_BIN_COUNT,
            output_png: PathBuf::from("histogram_gas_used.png"),
            output_svg: PathBuf::from("histogram_gas_used.svg"),
            title: None,
            x_label: "Gas Used".to_string(),
            y_label: "Percentage".to_string(),
            annotation: None,
            size: DEFAULT_FIGURE_SIZE,
        }
    }
}

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Render command arguments
///
/// # Returns
/// Ok if the report was written, or if the target iteration has no rows
/// (reported as a "no data" condition, with no files written)
///
/// # Errors
/// * Input file missing, unreadable, or missing a required column
/// * Output directory missing
/// * Chart rendering or file write failures
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting histogram report for: {}", args.input.display());

    // Step 1: Load the measurement log
    info!("Step 1/5: Loading measurement log...");
    let records = load_measurements(&args.input).context("Failed to load measurement log")?;

    // Step 2: Filter the target iteration
    info!("Step 2/5: Filtering iteration {}...", args.iteration);
    let samples = filter_iteration(&records, args.iteration);

    if samples.is_empty() {
        warn!(
            "No rows match iteration {}; nothing to render",
            args.iteration
        );
        println!("no data for iteration {}", args.iteration);
        return Ok(());
    }

    // Step 3: Compute the distribution
    info!(
        "Step 3/5: Computing {}-bin distribution over {} rows...",
        args.bins,
        samples.len()
    );
    let hist =
        Histogram::from_samples(&samples, args.bins).context("Failed to compute distribution")?;

    let (lo, hi) = hist.range();
    debug!(
        "Gas range {:.0}..{:.0}, tallest bar {:.1}%",
        lo,
        hi,
        hist.max_percentage()
    );

    // Step 4: Validate both destinations before any rendering work, so a
    // bad path cannot leave one of the two files behind
    info!("Step 4/5: Validating output paths...");
    validate_output_path(&args.output_png).context("Invalid PNG output path")?;
    validate_output_path(&args.output_svg).context("Invalid SVG output path")?;

    // Step 5: Render and persist both figures
    info!("Step 5/5: Rendering figures...");
    let config = build_chart_config(&args);

    render_png(&hist, &config, &args.output_png).context("Failed to render PNG figure")?;
    info!("✓ PNG written to: {}", args.output_png.display());

    render_svg(&hist, &config, &args.output_svg).context("Failed to render SVG figure")?;
    info!("✓ SVG written to: {}", args.output_svg.display());

    println!("Histogram saved as {}", args.output_png.display());

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Build the chart configuration from the command arguments
///
/// **Private** - internal helper for execute_render
fn build_chart_config(args: &RenderArgs) -> ChartConfig {
    let mut config = ChartConfig::new()
        .with_labels(args.x_label.clone(), args.y_label.clone())
        .with_size(args.size);

    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }

    if let Some(template) = &args.annotation {
        config = config.with_annotation(template.clone());
    }

    config
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.bins == 0 {
        anyhow::bail!("Bin count must be greater than 0");
    }

    if args.bins > 1000 {
        anyhow::bail!("Bin count is too large (max 1000)");
    }

    if args.size < 100 {
        anyhow::bail!("Figure size is too small (min 100 px)");
    }

    if args.size > 4000 {
        anyhow::bail!("Figure size is too large (max 4000 px)");
    }

    if args.output_png == args.output_svg {
        anyhow::bail!("PNG and SVG output paths must differ");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> RenderArgs {
        RenderArgs {
            input: PathBuf::from("measurements.csv"),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&valid_args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = RenderArgs {
            input: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_bins() {
        let args = RenderArgs {
            bins: 0,
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_too_many_bins() {
        let args = RenderArgs {
            bins: 2000,
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_tiny_figure() {
        let args = RenderArgs {
            size: 50,
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_output_paths() {
        let args = RenderArgs {
            output_png: PathBuf::from("out.png"),
            output_svg: PathBuf::from("out.png"),
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_build_chart_config_defaults() {
        let config = build_chart_config(&valid_args());

        assert_eq!(config.x_label, "Gas Used");
        assert_eq!(config.y_label, "Percentage");
        assert_eq!(config.annotation_text(7), "n = 7");
    }

    #[test]
    fn test_build_chart_config_overrides() {
        let args = RenderArgs {
            title: Some("Registration".to_string()),
            annotation: Some("AE_n = 50".to_string()),
            ..valid_args()
        };

        let config = build_chart_config(&args);

        assert_eq!(config.title.as_deref(), Some("Registration"));
        assert_eq!(config.annotation_text(7), "AE_n = 50");
    }
}
