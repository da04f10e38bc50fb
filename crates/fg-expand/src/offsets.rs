//! The bus-offset table: which bus tokens exist, how far each is shifted,
//! and which source bus the derived ones copy.

/// One fleet member's stagger entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusOffset {
    /// Token appearing inside `trip_id`, e.g. `"BUS2"`.
    pub token: String,
    /// Constant shift applied to this bus's stop times, minutes.
    pub offset_min: i64,
    /// `None` for source buses present in the generated base; for derived
    /// buses, the source token whose rows are copied.
    pub derived_from: Option<String>,
}

/// Ordered stagger table for the whole fleet.
///
/// Order matters twice: source matching scans tokens in table order (a trip
/// id is attributed to the first source token it contains), and derived rows
/// are emitted in table order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusOffsetTable {
    entries: Vec<BusOffset>,
}

impl BusOffsetTable {
    pub fn new(entries: Vec<BusOffset>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[BusOffset] {
        &self.entries
    }

    /// Source entries, in table order.
    pub fn sources(&self) -> impl Iterator<Item = &BusOffset> {
        self.entries.iter().filter(|e| e.derived_from.is_none())
    }

    /// Derived entries, in table order.
    pub fn derived(&self) -> impl Iterator<Item = &BusOffset> {
        self.entries.iter().filter(|e| e.derived_from.is_some())
    }

    /// The first source entry whose token appears inside `trip_id`, if any.
    pub fn source_in<'a>(&'a self, trip_id: &str) -> Option<&'a BusOffset> {
        self.sources().find(|e| trip_id.contains(e.token.as_str()))
    }

    /// Whether `trip_id` belongs to a derived bus (i.e. was produced by a
    /// previous expansion).
    pub fn is_derived(&self, trip_id: &str) -> bool {
        self.derived().any(|e| trip_id.contains(e.token.as_str()))
    }
}

impl Default for BusOffsetTable {
    /// The production fleet: four buses at 5-minute staggers, BUS3/BUS4
    /// derived from BUS1/BUS2.
    fn default() -> Self {
        let entry = |token: &str, offset_min: i64, source: Option<&str>| BusOffset {
            token: token.to_owned(),
            offset_min,
            derived_from: source.map(str::to_owned),
        };
        Self::new(vec![
            entry("BUS1", 0, None),
            entry("BUS2", 5, None),
            entry("BUS3", 10, Some("BUS1")),
            entry("BUS4", 15, Some("BUS2")),
        ])
    }
}
