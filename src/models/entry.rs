// src/models/entry.rs

/// One (label, value) pair parsed from a CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub value: u64,
}

impl Entry {
    #[inline]
    #[must_use]
    pub const fn new(label: String, value: u64) -> Self {
        Self { label, value }
    }
}
