// src/models/dataset.rs
use crate::models::Entry;

/// Ordered collection of chart entries.
///
/// Entries keep their insertion order until
/// [`sort_by_value_desc`](Self::sort_by_value_desc) re-orders them
/// descending by value. Labels need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Sum of all entry values.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.entries
            .iter()
            .fold(0, |acc, entry| acc.saturating_add(entry.value))
    }

    /// Share of the total held by the first entry with a matching label.
    ///
    /// Duplicate labels are legal input; only the first occurrence is
    /// considered. Returns 0.0 when the label is absent or the dataset
    /// sums to zero.
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn percentage(&self, label: &str) -> f64 {
        let total = self.sum();
        if total == 0 {
            return 0.0;
        }
        let numerator = self
            .entries
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.value);
        numerator as f64 / total as f64
    }

    /// Sorts entries descending by value. The sort is stable, so entries
    /// with equal values keep their load order.
    pub fn sort_by_value_desc(&mut self) {
        self.entries.sort_by(|a, b| b.value.cmp(&a.value));
    }
}

impl FromIterator<Entry> for Dataset {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
