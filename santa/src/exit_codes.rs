//! Stable exit codes for santa CLI commands.

/// Command succeeded (assignment written, or check passed).
pub const OK: i32 = 0;
/// Invalid input, config, or usage, or `santa check` found violations.
pub const INVALID: i32 = 1;
/// `santa assign` hit the round cap without a complete matching.
pub const UNMATCHED: i32 = 2;
/// `santa assign` generated an assignment but could not write it.
pub const WRITE_FAILED: i32 = 3;
