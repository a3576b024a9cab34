// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use config::RenderConfig;
pub use crate::core::loader::load_csv;
#[cfg(feature = "bar")]
pub use crate::core::render::bar::draw_bar;
pub use crate::core::render::pie::draw_pie;
pub use models::{Dataset, Entry, LoadOutcome};
