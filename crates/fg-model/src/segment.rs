//! Route segments and the distance table.

use std::collections::HashMap;

/// A directed edge between two stops with its road distance attached.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

/// Distances keyed by directed `(from, to)` stop-name pair.
#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    distances: HashMap<(String, String), f64>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: &str, to: &str, distance_km: f64) {
        self.distances
            .insert((from.to_owned(), to.to_owned()), distance_km);
    }

    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.distances
            .get(&(from.to_owned(), to.to_owned()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
