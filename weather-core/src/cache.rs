use std::collections::HashMap;

use crate::{Coordinate, WeatherRecord};

/// In-memory weather records keyed by coordinate.
///
/// Keys compare on the exact bit pattern of both components, so no rounding
/// or normalization happens. Entries live as long as the cache; there is no
/// eviction.
#[derive(Debug, Default)]
pub struct WeatherCache {
    entries: HashMap<(u64, u64), WeatherRecord>,
}

impl WeatherCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: Coordinate) -> Option<&WeatherRecord> {
        self.entries.get(&key(coord))
    }

    /// Store a record unless one is already present for `coord`.
    ///
    /// Returns the record held by the cache afterwards.
    pub fn insert(&mut self, coord: Coordinate, record: WeatherRecord) -> &WeatherRecord {
        self.entries.entry(key(coord)).or_insert(record)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.entries.contains_key(&key(coord))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn key(coord: Coordinate) -> (u64, u64) {
    (coord.lat.to_bits(), coord.lon.to_bits())
}
