//! Row structs for each feed table.
//!
//! Field order is the on-disk column order; field names are the exact GTFS
//! header names, so serde drives both serialization and the expansion pass's
//! re-parsing without any manual header plumbing.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StopRow {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRow {
    pub route_id: String,
    pub route_short_name: String,
    pub route_long_name: String,
    /// Always "3" (bus) in this feed.
    pub route_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripRow {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    /// The trip's final stop name.
    pub trip_headsign: String,
    pub direction_id: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StopTimeRow {
    pub trip_id: String,
    /// `HH:MM:SS`; hours may exceed 23 for past-midnight service.
    pub arrival_time: String,
    /// Always equal to `arrival_time` — the feed models no dwell time.
    pub departure_time: String,
    pub stop_id: String,
    /// 1-based position within the trip.
    pub stop_sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarRow {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    /// `YYYYMMDD`.
    pub start_date: String,
    pub end_date: String,
}
