// tests/integration_tests/common.rs
use anyhow::Result;
use csvchart::{Dataset, Entry};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_csv_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

pub fn sample_dataset() -> Dataset {
    [("A", 50), ("B", 30), ("C", 20)]
        .into_iter()
        .map(|(label, value)| Entry::new(label.to_owned(), value))
        .collect()
}
