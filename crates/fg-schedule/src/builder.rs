//! Day assembly: templates × buses × service window → the full trip list.
//!
//! Trip ids encode route, bus, and per-bus sequence number:
//! `ROUTE_B_BUS2_TRIP007`, with `_RETURN` appended for synthesized
//! return-direction trips.  Numbering is per (route, bus) and counts only
//! outbound trips; a return trip shares its outbound trip's number.

use fg_core::GenerateConfig;
use fg_model::{Route, Workbook};

use crate::generator::{trip_starts, TRIP_BUFFER_MIN};
use crate::reverse::reverse_timeline;
use crate::timeline::{stop_timeline, StopTimeEntry};

// ── Trip ──────────────────────────────────────────────────────────────────────

/// Travel direction along a route, with its GTFS `direction_id` encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Outbound,
    Return,
}

impl Direction {
    /// The `direction_id` value written to `trips.txt`.
    pub fn gtfs_id(self) -> u8 {
        match self {
            Direction::Outbound => 0,
            Direction::Return => 1,
        }
    }
}

/// One scheduled run of a bus along a route.
#[derive(Clone, Debug)]
pub struct Trip {
    /// Globally unique; encodes route, bus, and sequence number.
    pub trip_id: String,
    pub route: Route,
    pub direction: Direction,
    /// Minutes since midnight; may exceed 1440 for past-midnight service.
    pub start_min: f64,
    /// Per-stop offsets relative to `start_min`, in visit order.
    pub stop_times: Vec<StopTimeEntry>,
}

impl Trip {
    /// Name of the final stop, used as the GTFS headsign.
    pub fn headsign(&self) -> &str {
        self.stop_times
            .last()
            .map(|e| e.stop_name.as_str())
            .unwrap_or("")
    }
}

// ── DaySchedule ───────────────────────────────────────────────────────────────

/// Per-route figures for the operator summary.
#[derive(Copy, Clone, Debug, Default)]
pub struct RouteStats {
    pub segment_count: usize,
    pub total_km: f64,
    pub trip_count: usize,
}

/// The generated service day: every trip for every route and bus, plus the
/// summary statistics the CLI reports.
#[derive(Clone, Debug)]
pub struct DaySchedule {
    pub trips: Vec<Trip>,
    stats_a: RouteStats,
    stats_b: RouteStats,
}

impl DaySchedule {
    pub fn stats(&self, route: Route) -> &RouteStats {
        match route {
            Route::A => &self.stats_a,
            Route::B => &self.stats_b,
        }
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// Build the full day's schedule from the parsed workbook.
pub fn build_schedule(workbook: &Workbook, cfg: &GenerateConfig) -> DaySchedule {
    let mut trips = Vec::new();
    let mut stats_a = RouteStats::default();
    let mut stats_b = RouteStats::default();

    for route in Route::ALL {
        let segments = workbook.segments(route);
        let forward = stop_timeline(segments, &workbook.stops, cfg.speed_kph);
        let forward_duration = forward.last().map_or(0.0, |e| e.offset_min);

        // Return template computed once per route, shared by all buses.
        let reverse = route
            .bidirectional()
            .then(|| reverse_timeline(segments, &forward, cfg.speed_kph))
            .filter(|t| !t.is_empty());

        let mut trip_count = 0;
        for bus in 0..cfg.buses_per_route {
            let stagger = bus as f64 * cfg.bus_start_offset_min;

            for (i, start_min) in trip_starts(forward_duration, stagger, cfg)
                .into_iter()
                .enumerate()
            {
                let trip_id = format!("{}_BUS{}_TRIP{:03}", route.id(), bus + 1, i + 1);

                trips.push(Trip {
                    trip_id: trip_id.clone(),
                    route,
                    direction: Direction::Outbound,
                    start_min,
                    stop_times: forward.clone(),
                });
                trip_count += 1;

                if let Some(reverse) = &reverse {
                    // The bus turns around after a short layover at the
                    // terminus and runs the itinerary back.
                    trips.push(Trip {
                        trip_id: format!("{trip_id}_RETURN"),
                        route,
                        direction: Direction::Return,
                        start_min: start_min + forward_duration + TRIP_BUFFER_MIN,
                        stop_times: reverse.clone(),
                    });
                    trip_count += 1;
                }
            }
        }

        let stats = RouteStats {
            segment_count: segments.len(),
            total_km: segments.iter().map(|s| s.distance_km).sum(),
            trip_count,
        };
        match route {
            Route::A => stats_a = stats,
            Route::B => stats_b = stats,
        }
    }

    DaySchedule { trips, stats_a, stats_b }
}
