//! Stop roster.
//!
//! Stop *names* are the unique keys: the distance table and the route
//! itineraries both reference stops by name, so the registry indexes by name
//! while preserving workbook order (the order `stops.txt` is written in).

use std::collections::HashMap;

use fg_core::GeoPoint;

/// A transit stop as parsed from the workbook.  Immutable once parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    /// Operator-assigned stop code, carried into `stops.txt` as `stop_id`.
    pub id: String,
    /// Unique display name; the join key used by segments.
    pub name: String,
    pub pos: GeoPoint,
}

/// Insertion-ordered collection of stops, keyed by name.
///
/// Re-inserting an existing name replaces the stop in place (last row wins)
/// without changing its position in the output order.
#[derive(Clone, Debug, Default)]
pub struct StopRegistry {
    stops: Vec<Stop>,
    by_name: HashMap<String, usize>,
}

impl StopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stop: Stop) {
        match self.by_name.get(&stop.name) {
            Some(&idx) => self.stops[idx] = stop,
            None => {
                self.by_name.insert(stop.name.clone(), self.stops.len());
                self.stops.push(stop);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Stop> {
        self.by_name.get(name).map(|&idx| &self.stops[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops in workbook order.
    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }
}
