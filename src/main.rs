//! Gas Hist CLI
//!
//! A reporting tool for transaction gas measurements.
//! Renders normalized gas-usage histograms from CSV measurement logs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use gas_hist::commands::{execute_inspect, execute_render, validate_args, RenderArgs};
use gas_hist::utils::config::{DEFAULT_BIN_COUNT, DEFAULT_FIGURE_SIZE, DEFAULT_ITERATION};

/// Gas Hist - Normalized gas-usage histogram reports
#[derive(Parser, Debug)]
#[command(name = "gas-hist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a gas-usage histogram from a measurement log
    Render {
        /// Path to the measurement CSV ("Iteration" and "Gas Used" columns)
        #[arg(short, long)]
        input: PathBuf,

        /// Iteration to select
        #[arg(long, default_value_t = DEFAULT_ITERATION)]
        iteration: u32,

        /// Number of equal-width bins
        #[arg(long, default_value_t = DEFAULT_BIN_COUNT)]
        bins: usize,

        /// Output path for the PNG figure
        #[arg(long, default_value = "histogram_gas_used.png")]
        png: PathBuf,

        /// Output path for the SVG figure
        #[arg(long, default_value = "histogram_gas_used.svg")]
        svg: PathBuf,

        /// Figure title
        #[arg(long)]
        title: Option<String>,

        /// Horizontal axis label
        #[arg(long, default_value = "Gas Used")]
        x_label: String,

        /// Vertical axis label
        #[arg(long, default_value = "Percentage")]
        y_label: String,

        /// Annotation template; "{count}" expands to the filtered row count
        #[arg(long)]
        annotation: Option<String>,

        /// Square figure edge in pixels
        #[arg(long, default_value_t = DEFAULT_FIGURE_SIZE)]
        size: u32,
    },

    /// Summarize the iterations present in a measurement log
    Inspect {
        /// Path to the measurement CSV
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            input,
            iteration,
            bins,
            png,
            svg,
            title,
            x_label,
            y_label,
            annotation,
            size,
        } => {
            let args = RenderArgs {
                input,
                iteration,
                bins,
                output_png: png,
                output_svg: svg,
                title,
                x_label,
                y_label,
                annotation,
                size,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute render
            execute_render(args)?;
        }

        Commands::Inspect { input } => {
            execute_inspect(input)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Gas Hist v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Normalized gas-usage histogram reports from transaction measurement logs.");
}
