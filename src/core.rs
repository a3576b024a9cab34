// src/core.rs
pub mod loader;
pub mod render;
