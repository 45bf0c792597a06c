//! Configuration and constants for the CLI.

/// Exact header name of the iteration column (case-sensitive)
pub const ITERATION_COLUMN: &str = "Iteration";

/// Exact header name of the gas metric column (case-sensitive)
pub const GAS_USED_COLUMN: &str = "Gas Used";

/// Default number of equal-width bins
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Default iteration to select from the measurement log
pub const DEFAULT_ITERATION: u32 = 1;

/// Default square figure edge in pixels (a 5x5 inch figure at 100 dpi)
pub const DEFAULT_FIGURE_SIZE: u32 = 500;

/// Default bar fill color (#3066BE)
pub const BAR_COLOR: (u8, u8, u8) = (0x30, 0x66, 0xBE);
