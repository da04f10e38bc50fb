//! Trip placement across the service window.
//!
//! `trip_starts` walks a clock from the window start (plus the bus's stagger
//! offset) and emits one start time per trip that fits before the window
//! closes, inserting the configured rest breaks.  The walk is deterministic:
//! the same template duration, offset, breaks, and window always produce the
//! same start list.

use fg_core::GenerateConfig;

/// Idle minutes between consecutive trips of the same bus.
pub const TRIP_BUFFER_MIN: f64 = 5.0;

/// A break is taken only if it begins within this many minutes after the
/// deferred trip would have ended.
pub const BREAK_SNAP_WINDOW_MIN: f64 = 30.0;

/// Compute the start times (minutes since midnight) of every trip one bus
/// runs over the service day.
///
/// `trip_duration` is the template's final stop offset; `start_offset` is the
/// bus's stagger relative to the window start.
///
/// When a break's start falls inside a candidate trip's interval, the clock
/// first jumps past the would-be trip, then checks whether the break begins
/// within [`BREAK_SNAP_WINDOW_MIN`] of the new clock; only then does it snap
/// to the break's end and drop the slot entirely.  Because the matched break
/// start is always strictly before the advanced clock, the snap cannot fire
/// and the slot's trip is emitted at the shifted time instead.  That shifted
/// trip was admitted by a window check made *before* the shift, so it can
/// outlive the window.  Both quirks are preserved deliberately: published
/// feeds were built this way and trip counts/ids must remain stable.
pub fn trip_starts(trip_duration: f64, start_offset: f64, cfg: &GenerateConfig) -> Vec<f64> {
    let window = &cfg.service_window;
    let mut starts = Vec::new();
    let mut current = window.start_min + start_offset;

    while current + trip_duration <= window.end_min {
        let mut snapped = false;

        for brk in &cfg.breaks {
            if current <= brk.start_min && brk.start_min < current + trip_duration {
                // Defer past the slot, then see if the break is imminent.
                current += trip_duration;
                if current <= brk.start_min && brk.start_min < current + BREAK_SNAP_WINDOW_MIN {
                    current = brk.start_min + brk.duration_min;
                    snapped = true;
                }
                break;
            }
        }

        if !snapped {
            starts.push(current);
            current += trip_duration;
        }

        current += TRIP_BUFFER_MIN;
    }

    starts
}
