//! Named-schema workbook reader.
//!
//! The field workbook is exported to CSV with one header row; three parallel
//! tables share the sheet side by side, so any data row may populate any
//! subset of the column groups:
//!
//! ```csv
//! stop_id,stop_name,stop_lat,stop_lon,dist_from,dist_to,distance_km,route_a_from,route_a_to,route_b_from,route_b_to
//! S01,Delap Dock,7.0897,171.3803,Delap Dock,Uliga Market,3.0,Delap Dock,Uliga Market,,
//! S02,Uliga Market,7.1031,171.3687,Uliga Market,Rita Point,2.4,Uliga Market,Rita Point,Rita Point,Uliga Market
//! ```
//!
//! The header row is validated up front: any missing expected column aborts
//! with [`ModelError::MissingColumns`] before a single row is parsed.  Within
//! rows, each column group is parsed independently — a malformed latitude
//! drops only that row's stop entry, not its distance or itinerary entries.
//!
//! Segment references are resolved against the distance table after the full
//! sheet is read.  A reference with no distance entry is dropped with a
//! warning; a reference to a stop missing from the roster survives here and
//! is handled downstream by the timeline builder.

use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use fg_core::GeoPoint;

use crate::error::{ModelError, ModelResult};
use crate::route::Route;
use crate::segment::{DistanceTable, Segment};
use crate::stop::{Stop, StopRegistry};

// ── Schema ────────────────────────────────────────────────────────────────────

/// Every column the reader expects to find in the header row.
const EXPECTED_COLUMNS: [&str; 11] = [
    "stop_id",
    "stop_name",
    "stop_lat",
    "stop_lon",
    "dist_from",
    "dist_to",
    "distance_km",
    "route_a_from",
    "route_a_to",
    "route_b_from",
    "route_b_to",
];

/// One raw sheet row.  Everything is optional text; typed parsing happens per
/// column group so a bad cell cannot poison unrelated entries on the same row.
#[derive(Debug, Deserialize)]
struct SheetRow {
    stop_id:      Option<String>,
    stop_name:    Option<String>,
    stop_lat:     Option<String>,
    stop_lon:     Option<String>,
    dist_from:    Option<String>,
    dist_to:      Option<String>,
    distance_km:  Option<String>,
    route_a_from: Option<String>,
    route_a_to:   Option<String>,
    route_b_from: Option<String>,
    route_b_to:   Option<String>,
}

// ── Workbook ──────────────────────────────────────────────────────────────────

/// The fully parsed input: stop roster plus per-route segment lists with
/// distances attached.
#[derive(Clone, Debug)]
pub struct Workbook {
    pub stops: StopRegistry,
    route_a: Vec<Segment>,
    route_b: Vec<Segment>,
}

impl Workbook {
    /// Ordered segment list for a route.
    pub fn segments(&self, route: Route) -> &[Segment] {
        match route {
            Route::A => &self.route_a,
            Route::B => &self.route_b,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and parse the workbook CSV at `path`.
pub fn read_workbook(path: &Path) -> ModelResult<Workbook> {
    let file = std::fs::File::open(path)?;
    read_workbook_reader(file)
}

/// Like [`read_workbook`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn read_workbook_reader<R: Read>(reader: R) -> ModelResult<Workbook> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // ── Validate the header row against the expected schema ──────────────
    let headers = csv_reader.headers()?.clone();
    let missing: Vec<String> = EXPECTED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h.trim() == **col))
        .map(|col| (*col).to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(ModelError::MissingColumns(missing));
    }

    // ── Single pass over the rows, filling all three tables ───────────────
    let mut stops = StopRegistry::new();
    let mut distances = DistanceTable::new();
    let mut refs_a: Vec<(String, String)> = Vec::new();
    let mut refs_b: Vec<(String, String)> = Vec::new();

    for record in csv_reader.records() {
        // Structurally broken rows are skipped silently, like any other
        // malformed row.
        let Ok(record) = record else { continue };
        let Ok(row) = record.deserialize::<SheetRow>(Some(&headers)) else {
            continue;
        };

        if let Some(stop) = parse_stop(&row) {
            stops.insert(stop);
        }
        if let (Some(from), Some(to), Some(km)) = (
            text(&row.dist_from),
            text(&row.dist_to),
            number(&row.distance_km),
        ) {
            distances.insert(from, to, km);
        }
        if let (Some(from), Some(to)) = (text(&row.route_a_from), text(&row.route_a_to)) {
            refs_a.push((from.to_owned(), to.to_owned()));
        }
        if let (Some(from), Some(to)) = (text(&row.route_b_from), text(&row.route_b_to)) {
            refs_b.push((from.to_owned(), to.to_owned()));
        }
    }

    if stops.is_empty() {
        return Err(ModelError::NoStops);
    }

    debug!(
        "workbook parsed: {} stops, {} distance entries, {}+{} segment refs",
        stops.len(),
        distances.len(),
        refs_a.len(),
        refs_b.len()
    );

    let route_a = attach_distances(Route::A, refs_a, &distances);
    let route_b = attach_distances(Route::B, refs_b, &distances);

    Ok(Workbook { stops, route_a, route_b })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Trimmed, non-empty cell text.
fn text(cell: &Option<String>) -> Option<&str> {
    cell.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn number(cell: &Option<String>) -> Option<f64> {
    text(cell)?.parse().ok()
}

fn parse_stop(row: &SheetRow) -> Option<Stop> {
    let id = text(&row.stop_id)?;
    let name = text(&row.stop_name)?;
    let lat = number(&row.stop_lat)?;
    let lon = number(&row.stop_lon)?;
    Some(Stop {
        id: id.to_owned(),
        name: name.to_owned(),
        pos: GeoPoint::new(lat, lon),
    })
}

/// Resolve segment references against the distance table, dropping (with a
/// warning) any pair the table does not know.  Segments are never fabricated.
fn attach_distances(
    route: Route,
    refs: Vec<(String, String)>,
    distances: &DistanceTable,
) -> Vec<Segment> {
    refs.into_iter()
        .filter_map(|(from, to)| match distances.get(&from, &to) {
            Some(distance_km) => Some(Segment { from, to, distance_km }),
            None => {
                warn!("no distance found for {route} segment {from} -> {to}; dropping it");
                None
            }
        })
        .collect()
}
