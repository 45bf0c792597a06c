//! Gas Hist
//!
//! Normalized gas-usage histogram reports from transaction
//! measurement logs.
//!
//! This crate provides the core implementation for the
//! `gas-hist` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install gas-hist
//! gas-hist --help
//! ```

pub mod chart;
pub mod commands;
pub mod histogram;
pub mod loader;
pub mod output;
pub mod utils;
