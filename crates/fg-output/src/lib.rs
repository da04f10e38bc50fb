//! `fg-output` — GTFS feed tables and their on-disk representation.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`row`]   | serde row structs, one per GTFS table                      |
//! | [`feed`]  | `FeedTables`, `build_feed` (schedule → rows)               |
//! | [`dir`]   | feed-directory reader/writer with write-then-replace       |
//! | [`error`] | `OutputError`, `OutputResult<T>`                           |
//!
//! # Files produced
//!
//! `stops.txt`, `routes.txt`, `trips.txt`, `stop_times.txt`, `calendar.txt` —
//! the minimal static feed the downstream consumers load.  Column order is
//! fixed by the row structs' field order and must not change: the expansion
//! pass re-reads and rewrites `trips.txt` and `stop_times.txt` in the same
//! shape.

pub mod dir;
pub mod error;
pub mod feed;
pub mod row;

#[cfg(test)]
mod tests;

pub use dir::{read_stop_times, read_trips, write_feed, write_stop_times, write_trips};
pub use error::{OutputError, OutputResult};
pub use feed::{build_feed, FeedTables};
pub use row::{CalendarRow, RouteRow, StopRow, StopTimeRow, TripRow};
