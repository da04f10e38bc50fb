//! Feed assembly: a generated `DaySchedule` plus the stop roster become the
//! five in-memory tables, ready to be persisted by [`crate::dir`].

use fg_core::time::fmt_offset_time;
use fg_model::{Route, StopRegistry};
use fg_schedule::DaySchedule;

use crate::row::{CalendarRow, RouteRow, StopRow, StopTimeRow, TripRow};

/// The single service id: one calendar entry active every day of the week.
pub const SERVICE_ID: &str = "WEEKDAY";

/// GTFS `route_type` for bus service.
const ROUTE_TYPE_BUS: &str = "3";

/// Fixed calendar validity range, `YYYYMMDD`.
const CALENDAR_START: &str = "20250101";
const CALENDAR_END: &str = "20251231";

/// The complete static feed, in memory.
#[derive(Clone, Debug, Default)]
pub struct FeedTables {
    pub stops: Vec<StopRow>,
    pub routes: Vec<RouteRow>,
    pub trips: Vec<TripRow>,
    pub stop_times: Vec<StopTimeRow>,
    pub calendar: Vec<CalendarRow>,
}

/// Convert a generated schedule into feed rows.
///
/// Stops keep workbook order; trips keep generation order; stop-time rows
/// are grouped per trip with a 1-based `stop_sequence`.  Arrival and
/// departure are the same whole-minute `HH:MM:SS` value (no dwell time),
/// with hours above 23 for trips running past midnight.
pub fn build_feed(stops: &StopRegistry, schedule: &DaySchedule) -> FeedTables {
    let stop_rows = stops
        .iter()
        .map(|s| StopRow {
            stop_id: s.id.clone(),
            stop_name: s.name.clone(),
            stop_lat: s.pos.lat,
            stop_lon: s.pos.lon,
        })
        .collect();

    let route_rows = Route::ALL
        .iter()
        .map(|r| RouteRow {
            route_id: r.id().to_owned(),
            route_short_name: r.short_name().to_owned(),
            route_long_name: r.long_name().to_owned(),
            route_type: ROUTE_TYPE_BUS.to_owned(),
        })
        .collect();

    let mut trip_rows = Vec::with_capacity(schedule.trips.len());
    let mut stop_time_rows = Vec::new();

    for trip in &schedule.trips {
        trip_rows.push(TripRow {
            route_id: trip.route.id().to_owned(),
            service_id: SERVICE_ID.to_owned(),
            trip_id: trip.trip_id.clone(),
            trip_headsign: trip.headsign().to_owned(),
            direction_id: trip.direction.gtfs_id(),
        });

        for (i, entry) in trip.stop_times.iter().enumerate() {
            let time = fmt_offset_time(trip.start_min + entry.offset_min);
            stop_time_rows.push(StopTimeRow {
                trip_id: trip.trip_id.clone(),
                arrival_time: time.clone(),
                departure_time: time,
                stop_id: entry.stop_id.clone(),
                stop_sequence: (i + 1) as u32,
            });
        }
    }

    let calendar = vec![CalendarRow {
        service_id: SERVICE_ID.to_owned(),
        monday: 1,
        tuesday: 1,
        wednesday: 1,
        thursday: 1,
        friday: 1,
        saturday: 1,
        sunday: 1,
        start_date: CALENDAR_START.to_owned(),
        end_date: CALENDAR_END.to_owned(),
    }];

    FeedTables {
        stops: stop_rows,
        routes: route_rows,
        trips: trip_rows,
        stop_times: stop_time_rows,
        calendar,
    }
}
