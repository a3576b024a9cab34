// src/core/loader.rs
use anyhow::{Context as _, Result, bail};
use csv::ReaderBuilder;
use std::path::Path;

use crate::models::{Entry, LoadOutcome};

/// Reads a two-column CSV file into a [`LoadOutcome`].
///
/// The first field of each row is the label, the second its integer
/// value. Rows whose value field does not parse as an unsigned integer
/// are dropped and counted in [`LoadOutcome::skipped_rows`]. Entries keep
/// their row order. No header row is assumed.
///
/// # Arguments
///
/// * `path` - The CSV file to read
///
/// # Returns
///
/// * `Ok(LoadOutcome)` - The parsed entries and the skipped-row count
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or read
/// * The CSV is structurally invalid (inconsistent field counts)
/// * A row has fewer than two fields
pub fn load_csv(path: &Path) -> Result<LoadOutcome> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let mut outcome = LoadOutcome::new();
    for (row, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to parse CSV file {}", path.display()))?;
        let label = record.get(0).unwrap_or_default();
        let Some(value_field) = record.get(1) else {
            bail!(
                "Malformed row {} in {}: expected two fields, found {}",
                row.saturating_add(1),
                path.display(),
                record.len()
            );
        };

        // Lenient parsing: a non-integer value drops the row, it does not
        // abort the load.
        match value_field.parse::<u64>() {
            Ok(value) => outcome.dataset.push(Entry::new(label.to_owned(), value)),
            Err(_) => outcome.skipped_rows = outcome.skipped_rows.saturating_add(1),
        }
    }

    Ok(outcome)
}
