//! Travel-time calculation: segments → per-stop cumulative time offsets.
//!
//! Offsets are `f64` minutes relative to trip start; no rounding happens here.
//! Formatting to whole-minute `HH:MM:SS` strings is the output layer's job.

use log::warn;

use fg_model::{Segment, StopRegistry};

/// One stop visit within a trip template, `offset_min` minutes after the
/// trip's start.  The first entry of a template always has offset 0.
#[derive(Clone, Debug, PartialEq)]
pub struct StopTimeEntry {
    pub stop_id: String,
    pub stop_name: String,
    pub offset_min: f64,
}

/// Minutes needed to cover `distance_km` at a constant `speed_kph`.
#[inline]
pub fn travel_time_min(distance_km: f64, speed_kph: f64) -> f64 {
    distance_km / speed_kph * 60.0
}

/// Walk an ordered segment list and emit the cumulative stop timeline.
///
/// The first segment's `from` stop seeds the template at offset 0; each
/// segment then advances a running clock by its travel time and emits its
/// `to` stop.  A stop name missing from the registry drops that entry only —
/// the clock still advances across the segment, so downstream offsets stay
/// correct.
pub fn stop_timeline(
    segments: &[Segment],
    stops: &StopRegistry,
    speed_kph: f64,
) -> Vec<StopTimeEntry> {
    let mut timeline = Vec::with_capacity(segments.len() + 1);
    let mut cumulative_min = 0.0;

    if let Some(first) = segments.first() {
        match stops.get(&first.from) {
            Some(stop) => timeline.push(StopTimeEntry {
                stop_id: stop.id.clone(),
                stop_name: first.from.clone(),
                offset_min: 0.0,
            }),
            None => warn!("unknown stop {:?} at start of itinerary; skipping entry", first.from),
        }
    }

    for segment in segments {
        cumulative_min += travel_time_min(segment.distance_km, speed_kph);

        match stops.get(&segment.to) {
            Some(stop) => timeline.push(StopTimeEntry {
                stop_id: stop.id.clone(),
                stop_name: segment.to.clone(),
                offset_min: cumulative_min,
            }),
            None => warn!("unknown stop {:?} in itinerary; skipping entry", segment.to),
        }
    }

    timeline
}
