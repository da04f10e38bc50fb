//! Return-direction synthesis for bidirectional routes.
//!
//! The return template is *not* computed by reversing the distance-table
//! lookups.  It starts at the forward template's final stop, walks the
//! forward segments back to front re-accumulating travel time, and resolves
//! each stop's identity by matching the segment's `from` name against the
//! forward template.  A stop that was dropped from the forward template (e.g.
//! missing from the roster) is therefore dropped from the return template
//! too, keeping the two directions' stop sets identical.

use fg_model::Segment;

use crate::timeline::{travel_time_min, StopTimeEntry};

/// Synthesize the return-direction template from a forward segment list and
/// its computed forward template.
///
/// Returns an empty template when the forward template is empty.
pub fn reverse_timeline(
    segments: &[Segment],
    forward: &[StopTimeEntry],
    speed_kph: f64,
) -> Vec<StopTimeEntry> {
    let Some(last) = forward.last() else {
        return Vec::new();
    };

    let mut timeline = Vec::with_capacity(forward.len());
    timeline.push(StopTimeEntry {
        stop_id: last.stop_id.clone(),
        stop_name: last.stop_name.clone(),
        offset_min: 0.0,
    });

    let mut cumulative_min = 0.0;
    for segment in segments.iter().rev() {
        cumulative_min += travel_time_min(segment.distance_km, speed_kph);

        // The segment's forward origin is the return-direction arrival stop.
        if let Some(entry) = forward.iter().find(|e| e.stop_name == segment.from) {
            timeline.push(StopTimeEntry {
                stop_id: entry.stop_id.clone(),
                stop_name: segment.from.clone(),
                offset_min: cumulative_min,
            });
        }
    }

    timeline
}
