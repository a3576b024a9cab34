// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::core::loader::load_csv;
#[cfg(feature = "bar")]
use crate::core::render::bar::draw_bar;
use crate::core::render::pie::draw_pie;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file to read (label, integer value per row)
    #[arg(long, default_value = "input.csv")]
    pub csv: PathBuf,

    /// Output filename prefix, without extension
    #[arg(long, default_value = "output")]
    pub output: String,

    /// Output image width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Generate a pie chart
    #[arg(long)]
    pub pie: bool,

    /// Generate a bar chart
    #[arg(long)]
    pub bar: bool,

    /// TOML file overriding the rendering parameters
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Loads the CSV, sorts it, and writes the requested chart files.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The CSV file cannot be opened or is structurally invalid
/// * The dataset is empty or sums to zero
/// * An output file cannot be written
pub fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    let mut outcome = load_csv(&args.csv)?;
    if outcome.skipped_rows > 0 {
        eprintln!(
            "Skipped {} row(s) with a non-integer value column",
            outcome.skipped_rows
        );
    }
    outcome.dataset.sort_by_value_desc();

    if args.pie {
        let doc = draw_pie(&outcome.dataset, args.width, args.height, &config)?;
        let path = format!("{}-pie.svg", args.output);
        fs::write(&path, doc).with_context(|| format!("Failed to write {path}"))?;
    }

    if args.bar {
        #[cfg(feature = "bar")]
        {
            let doc = draw_bar(&outcome.dataset, args.width, args.height, &config)?;
            let path = format!("{}-bar.svg", args.output);
            fs::write(&path, doc).with_context(|| format!("Failed to write {path}"))?;
        }
        #[cfg(not(feature = "bar"))]
        anyhow::bail!("bar chart support was not compiled in");
    }

    Ok(())
}
