//! Schedule time model.
//!
//! # Design
//!
//! Two time representations coexist because the two pipeline passes need
//! different arithmetic:
//!
//! - **Generation** works in `f64` minutes since midnight.  Travel times are
//!   fractional (km / km·h⁻¹), so offsets stay floating-point until the final
//!   formatting step, which truncates to whole minutes.  The service day may
//!   run past midnight, so minute values above 1440 (and formatted hours
//!   above 23) are legal — `26:00:00` means 02:00 the next day.
//! - **Expansion** re-reads already formatted `HH:MM:SS` strings.  Those are
//!   parsed into [`TimeOfDay`] (seconds since midnight, hours wrapped modulo
//!   24 at parse time), shifted, and re-formatted with hours 00–23.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

const SECS_PER_DAY: i64 = 86_400;

// ── Offset formatting ─────────────────────────────────────────────────────────

/// Format minutes-since-midnight as `HH:MM:00`.
///
/// Fractional minutes are truncated (not rounded), matching the generator's
/// whole-minute output.  Hours are *not* wrapped: past-midnight times keep
/// hours ≥ 24 as GTFS requires for service days crossing midnight.
pub fn fmt_offset_time(minutes: f64) -> String {
    let total = minutes as i64;
    format!("{:02}:{:02}:00", total / 60, total % 60)
}

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// A wall-clock time of day, stored as seconds since midnight (0..86400).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TimeOfDay {
    secs: u32,
}

impl TimeOfDay {
    /// Build from components.  Hours ≥ 24 wrap modulo 24.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> CoreResult<Self> {
        if minutes >= 60 || seconds >= 60 {
            return Err(CoreError::Parse(format!(
                "time component out of range: {hours:02}:{minutes:02}:{seconds:02}"
            )));
        }
        Ok(Self {
            secs: (hours % 24) * 3_600 + minutes * 60 + seconds,
        })
    }

    /// Parse an `HH:MM:SS` string.  Hours may exceed 23 (wrapped modulo 24).
    pub fn parse(s: &str) -> CoreResult<Self> {
        let mut parts = s.split(':');
        let (h, m, sec) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), Some(sec), None) => (h, m, sec),
            _ => return Err(CoreError::Parse(format!("expected HH:MM:SS, got {s:?}"))),
        };
        let field = |v: &str| {
            v.parse::<u32>()
                .map_err(|_| CoreError::Parse(format!("invalid time field {v:?} in {s:?}")))
        };
        Self::new(field(h)?, field(m)?, field(sec)?)
    }

    /// Seconds since midnight.
    #[inline]
    pub fn seconds(self) -> u32 {
        self.secs
    }

    /// Shift by a signed number of minutes, wrapping modulo 24 hours.
    pub fn shift_minutes(self, minutes: i64) -> TimeOfDay {
        let shifted = (self.secs as i64 + minutes * 60).rem_euclid(SECS_PER_DAY);
        TimeOfDay { secs: shifted as u32 }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.secs / 3_600,
            (self.secs % 3_600) / 60,
            self.secs % 60
        )
    }
}

// ── ServiceWindow ─────────────────────────────────────────────────────────────

/// The daily operating interval, in minutes since midnight.
///
/// `end_min` may exceed 1440 to represent service running past midnight
/// (e.g. 1560 = 26:00 = 02:00 next day).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceWindow {
    pub start_min: f64,
    pub end_min: f64,
}

impl ServiceWindow {
    pub fn new(start_min: f64, end_min: f64) -> Self {
        Self { start_min, end_min }
    }
}

// ── Break ─────────────────────────────────────────────────────────────────────

/// A scheduled driver rest break, global to all routes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Break {
    /// Time of day the break begins, minutes since midnight.
    pub start_min: f64,
    /// Break length in minutes.
    pub duration_min: f64,
}

impl Break {
    pub fn new(start_min: f64, duration_min: f64) -> Self {
        Self { start_min, duration_min }
    }
}
