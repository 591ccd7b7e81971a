//! Constants for range construction and line formatting.

/// Lower bound used when a generator is created from an upper bound alone.
pub const DEFAULT_LOWER_BOUND: i64 = 1;

/// Separator placed between labels when a step is rendered as one line.
pub const LABEL_SEPARATOR: &str = " ";
