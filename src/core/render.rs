// src/core/render.rs
#[cfg(feature = "bar")]
pub mod bar;
pub mod geometry;
pub mod pie;
