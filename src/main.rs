// src/main.rs
use anyhow::Result;
use clap::Parser;

use csvchart::cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}
