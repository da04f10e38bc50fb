//! Feed-directory I/O.
//!
//! Every table is written to a `.tmp` sibling first and renamed over the
//! target, so a crash mid-write never leaves a half-written table where a
//! consumer might pick it up.  The rename is atomic on the same filesystem.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::OutputResult;
use crate::feed::FeedTables;
use crate::row::{StopTimeRow, TripRow};

pub const STOPS_FILE: &str = "stops.txt";
pub const ROUTES_FILE: &str = "routes.txt";
pub const TRIPS_FILE: &str = "trips.txt";
pub const STOP_TIMES_FILE: &str = "stop_times.txt";
pub const CALENDAR_FILE: &str = "calendar.txt";

// ── Writing ───────────────────────────────────────────────────────────────────

/// Persist a complete feed, creating `dir` if needed.
pub fn write_feed(dir: &Path, feed: &FeedTables) -> OutputResult<()> {
    fs::create_dir_all(dir)?;
    write_table(dir, STOPS_FILE, &feed.stops)?;
    write_table(dir, ROUTES_FILE, &feed.routes)?;
    write_table(dir, TRIPS_FILE, &feed.trips)?;
    write_table(dir, STOP_TIMES_FILE, &feed.stop_times)?;
    write_table(dir, CALENDAR_FILE, &feed.calendar)?;
    Ok(())
}

/// Rewrite `trips.txt` (expansion pass).
pub fn write_trips(dir: &Path, rows: &[TripRow]) -> OutputResult<()> {
    write_table(dir, TRIPS_FILE, rows)
}

/// Rewrite `stop_times.txt` (expansion pass).
pub fn write_stop_times(dir: &Path, rows: &[StopTimeRow]) -> OutputResult<()> {
    write_table(dir, STOP_TIMES_FILE, rows)
}

fn write_table<T: Serialize>(dir: &Path, name: &str, rows: &[T]) -> OutputResult<()> {
    let tmp = dir.join(format!("{name}.tmp"));
    {
        let mut writer = csv::Writer::from_path(&tmp)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    fs::rename(tmp, dir.join(name))?;
    Ok(())
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Load `trips.txt` from an existing feed directory.
pub fn read_trips(dir: &Path) -> OutputResult<Vec<TripRow>> {
    read_table(dir, TRIPS_FILE)
}

/// Load `stop_times.txt` from an existing feed directory.
pub fn read_stop_times(dir: &Path) -> OutputResult<Vec<StopTimeRow>> {
    read_table(dir, STOP_TIMES_FILE)
}

fn read_table<T: DeserializeOwned>(dir: &Path, name: &str) -> OutputResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(dir.join(name))?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        rows.push(result?);
    }
    Ok(rows)
}
