//! `fg-model` — input data model: stops, route segments, and the workbook
//! reader.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`stop`]     | `Stop`, `StopRegistry` (name-keyed, insertion-ordered)|
//! | [`segment`]  | `Segment`, `DistanceTable`                            |
//! | [`route`]    | `Route` — the two fixed routes A and B                |
//! | [`workbook`] | named-schema CSV reader → `Workbook`                  |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                        |
//!
//! # Input contract (summary)
//!
//! One CSV with named headers carries three parallel tables; any row may
//! contribute to any subset of them:
//!
//! - stop roster: `stop_id, stop_name, stop_lat, stop_lon`
//! - distance table: `dist_from, dist_to, distance_km`
//! - route itineraries: `route_a_from, route_a_to` and `route_b_from,
//!   route_b_to`
//!
//! Missing headers abort with a structured error.  Malformed cells drop only
//! the affected table entry, never the whole row.  Segment references with no
//! distance entry are dropped with a warning.

pub mod error;
pub mod route;
pub mod segment;
pub mod stop;
pub mod workbook;

#[cfg(test)]
mod tests;

pub use error::{ModelError, ModelResult};
pub use route::Route;
pub use segment::{DistanceTable, Segment};
pub use stop::{Stop, StopRegistry};
pub use workbook::{read_workbook, read_workbook_reader, Workbook};
