//! Fixed published price bands keyed by head count.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from a discrete visitor count to an additive surcharge.
///
/// Lookups never interpolate: a count without a band costs nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    bands: BTreeMap<u32, i64>,
}

impl RateTable {
    #[must_use]
    pub fn from_bands(bands: &[(u32, i64)]) -> Self {
        Self {
            bands: bands.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn surcharge(&self, count: u32) -> i64 {
        self.bands.get(&count).copied().unwrap_or(0)
    }

    /// Counts offered in the selector for this table.
    pub fn counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.bands.keys().copied()
    }

    #[must_use]
    pub fn contains(&self, count: u32) -> bool {
        self.bands.contains_key(&count)
    }

    #[must_use]
    pub fn max_count(&self) -> Option<u32> {
        self.bands.keys().next_back().copied()
    }

    /// True when surcharges never drop as the count grows.
    #[must_use]
    pub fn is_non_decreasing(&self) -> bool {
        self.bands
            .values()
            .zip(self.bands.values().skip(1))
            .all(|(lower, upper)| lower <= upper)
    }
}
