// src/models/load_outcome.rs
use crate::models::Dataset;

/// Result of loading a CSV file: the parsed dataset plus the number of
/// rows dropped because their value column was not an integer.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    pub skipped_rows: u64,
}

impl LoadOutcome {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dataset: Dataset::new(),
            skipped_rows: 0,
        }
    }
}
