// src/models.rs
mod dataset;
mod entry;
mod load_outcome;

pub use dataset::Dataset;
pub use entry::Entry;
pub use load_outcome::LoadOutcome;
