//! Unit tests for fg-output.

use std::io::Cursor;

use fg_core::{GenerateConfig, ServiceWindow};
use fg_model::read_workbook_reader;
use fg_schedule::{build_schedule, DaySchedule};

use crate::{build_feed, FeedTables};

// ── Helpers ───────────────────────────────────────────────────────────────────

const WORKBOOK_CSV: &str = "stop_id,stop_name,stop_lat,stop_lon,dist_from,dist_to,distance_km,route_a_from,route_a_to,route_b_from,route_b_to\n\
S01,Delap,7.0897,171.3803,Delap,Uliga,3.0,Delap,Uliga,Delap,Uliga\n\
S02,Uliga,7.1031,171.3687,Uliga,Rita,2.4,Uliga,Rita,,\n\
S03,Rita,7.1175,171.3570,,,,,,,\n";

fn small_feed() -> (FeedTables, DaySchedule) {
    let wb = read_workbook_reader(Cursor::new(WORKBOOK_CSV)).unwrap();
    let cfg = GenerateConfig {
        service_window: ServiceWindow::new(360.0, 480.0),
        breaks: vec![],
        ..GenerateConfig::default()
    };
    let schedule = build_schedule(&wb, &cfg);
    (build_feed(&wb.stops, &schedule), schedule)
}

// ── Feed assembly ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod feed {
    use super::*;

    #[test]
    fn stops_in_workbook_order() {
        let (feed, _) = small_feed();
        let names: Vec<&str> = feed.stops.iter().map(|s| s.stop_name.as_str()).collect();
        assert_eq!(names, vec!["Delap", "Uliga", "Rita"]);
        assert_eq!(feed.stops[0].stop_lat, 7.0897);
    }

    #[test]
    fn exactly_two_bus_routes() {
        let (feed, _) = small_feed();
        assert_eq!(feed.routes.len(), 2);
        assert_eq!(feed.routes[0].route_id, "ROUTE_A");
        assert_eq!(feed.routes[1].route_short_name, "B");
        assert!(feed.routes.iter().all(|r| r.route_type == "3"));
    }

    #[test]
    fn trips_carry_service_id_and_headsign() {
        let (feed, schedule) = small_feed();
        assert_eq!(feed.trips.len(), schedule.trips.len());
        assert!(feed.trips.iter().all(|t| t.service_id == "WEEKDAY"));

        let first_a = feed
            .trips
            .iter()
            .find(|t| t.trip_id == "ROUTE_A_BUS1_TRIP001")
            .unwrap();
        assert_eq!(first_a.trip_headsign, "Rita");
        assert_eq!(first_a.direction_id, 0);

        let first_return = feed
            .trips
            .iter()
            .find(|t| t.trip_id.ends_with("_RETURN"))
            .unwrap();
        assert_eq!(first_return.direction_id, 1);
        assert_eq!(first_return.trip_headsign, "Delap");
    }

    #[test]
    fn first_trip_reaches_second_stop_at_0612() {
        // 3 km at 15 km/h = 12 min from the 06:00 window start.
        let (feed, _) = small_feed();
        let rows: Vec<_> = feed
            .stop_times
            .iter()
            .filter(|r| r.trip_id == "ROUTE_A_BUS1_TRIP001")
            .collect();
        assert_eq!(rows[0].arrival_time, "06:00:00");
        assert_eq!(rows[1].arrival_time, "06:12:00");
        assert_eq!(rows[1].departure_time, "06:12:00");
    }

    #[test]
    fn stop_sequence_is_one_based_per_trip() {
        let (feed, _) = small_feed();
        let seqs: Vec<u32> = feed
            .stop_times
            .iter()
            .filter(|r| r.trip_id == "ROUTE_A_BUS1_TRIP001")
            .map(|r| r.stop_sequence)
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn single_everyday_calendar_entry() {
        let (feed, _) = small_feed();
        assert_eq!(feed.calendar.len(), 1);
        let cal = &feed.calendar[0];
        assert_eq!(cal.service_id, "WEEKDAY");
        assert_eq!(
            (cal.monday, cal.tuesday, cal.wednesday, cal.thursday, cal.friday, cal.saturday, cal.sunday),
            (1, 1, 1, 1, 1, 1, 1)
        );
        assert_eq!(cal.start_date, "20250101");
        assert_eq!(cal.end_date, "20251231");
    }
}

// ── Directory I/O ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod dir {
    use super::*;
    use crate::dir::{write_feed, write_stop_times};
    use crate::{read_stop_times, read_trips};

    #[test]
    fn writes_all_five_tables() {
        let (feed, _) = small_feed();
        let tmp = tempfile::tempdir().unwrap();
        write_feed(tmp.path(), &feed).unwrap();

        for name in ["stops.txt", "routes.txt", "trips.txt", "stop_times.txt", "calendar.txt"] {
            assert!(tmp.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn no_temp_files_left_behind() {
        let (feed, _) = small_feed();
        let tmp = tempfile::tempdir().unwrap();
        write_feed(tmp.path(), &feed).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn headers_match_gtfs_exactly() {
        let (feed, _) = small_feed();
        let tmp = tempfile::tempdir().unwrap();
        write_feed(tmp.path(), &feed).unwrap();

        let first_line = |name: &str| {
            std::fs::read_to_string(tmp.path().join(name))
                .unwrap()
                .lines()
                .next()
                .unwrap()
                .to_owned()
        };
        assert_eq!(first_line("stops.txt"), "stop_id,stop_name,stop_lat,stop_lon");
        assert_eq!(
            first_line("routes.txt"),
            "route_id,route_short_name,route_long_name,route_type"
        );
        assert_eq!(
            first_line("trips.txt"),
            "route_id,service_id,trip_id,trip_headsign,direction_id"
        );
        assert_eq!(
            first_line("stop_times.txt"),
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence"
        );
        assert_eq!(
            first_line("calendar.txt"),
            "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date"
        );
    }

    #[test]
    fn read_back_round_trips() {
        let (feed, _) = small_feed();
        let tmp = tempfile::tempdir().unwrap();
        write_feed(tmp.path(), &feed).unwrap();

        assert_eq!(read_trips(tmp.path()).unwrap(), feed.trips);
        assert_eq!(read_stop_times(tmp.path()).unwrap(), feed.stop_times);
    }

    #[test]
    fn rewrite_replaces_previous_contents() {
        let (feed, _) = small_feed();
        let tmp = tempfile::tempdir().unwrap();
        write_feed(tmp.path(), &feed).unwrap();

        let truncated = &feed.stop_times[..2];
        write_stop_times(tmp.path(), truncated).unwrap();
        assert_eq!(read_stop_times(tmp.path()).unwrap(), truncated);
    }

    #[test]
    fn missing_table_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(read_trips(tmp.path()).is_err());
    }
}
