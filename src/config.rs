// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Rendering parameters shared by the pie and bar renderers.
///
/// The pie radius is `min(width, height) * radius_ratio / 2`, labels sit
/// at `radius * label_offset` from the center, and colors cycle through
/// `palette` by entry index modulo the palette length.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Fill and stroke colors, cycled by entry index.
    pub palette: Vec<String>,
    /// Fraction of the smaller canvas dimension spanned by the pie diameter.
    pub radius_ratio: f64,
    /// Label distance from center, as a multiple of the radius.
    pub label_offset: f64,
    /// Vertical margin above and below bar columns, in pixels.
    pub bar_margin: f64,
    /// Horizontal gap between bar columns, in pixels.
    pub bar_gap: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: ["red", "blue", "black", "green"]
                .map(String::from)
                .to_vec(),
            radius_ratio: 0.7,
            label_offset: 1.2,
            bar_margin: 60.0,
            bar_gap: 10.0,
        }
    }
}

impl RenderConfig {
    /// Color for the entry at `index`, wrapping around the palette.
    /// Falls back to black if the palette is empty.
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        self.palette
            .get(index % self.palette.len().max(1))
            .map_or("black", String::as_str)
    }

    /// Loads rendering parameters from a TOML file. Keys missing from the
    /// file keep their default values.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The file is not valid TOML or contains unknown keys
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
