//! Inspect command implementation.
//!
//! Summarizes a measurement log so the operator can pick the iteration to
//! render: per-iteration row counts and gas min/median/max.

use crate::loader::load_measurements;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Execute the inspect command
///
/// **Public** - entry point called from main.rs
pub fn execute_inspect(input: PathBuf) -> Result<()> {
    println!("Inspecting measurement log: {}", input.display());

    let records = load_measurements(&input).context("Failed to load measurement log")?;

    let mut by_iteration: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for record in &records {
        by_iteration
            .entry(record.iteration)
            .or_default()
            .push(record.gas_used);
    }

    println!("  Rows:       {}", records.len());
    println!("  Iterations: {}", by_iteration.len());

    for (iteration, gas) in &mut by_iteration {
        gas.sort_by(|a, b| a.total_cmp(b));
        let min = gas[0];
        let max = gas[gas.len() - 1];
        let median = gas[gas.len() / 2];

        println!(
            "    iteration {:>3}: {:>5} rows | gas min {:.0} | median {:.0} | max {:.0}",
            iteration,
            gas.len(),
            min,
            median,
            max
        );
    }

    Ok(())
}
