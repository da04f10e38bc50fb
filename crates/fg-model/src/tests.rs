//! Unit tests for fg-model.

use std::io::Cursor;

use fg_core::GeoPoint;

use crate::{read_workbook_reader, ModelError, Route, Stop, StopRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HEADER: &str = "stop_id,stop_name,stop_lat,stop_lon,dist_from,dist_to,distance_km,route_a_from,route_a_to,route_b_from,route_b_to\n";

fn workbook(rows: &str) -> String {
    format!("{HEADER}{rows}")
}

// ── StopRegistry ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_registry {
    use super::*;

    fn stop(id: &str, name: &str) -> Stop {
        Stop {
            id: id.to_owned(),
            name: name.to_owned(),
            pos: GeoPoint::new(7.09, 171.38),
        }
    }

    #[test]
    fn preserves_insertion_order() {
        let mut reg = StopRegistry::new();
        reg.insert(stop("S02", "Uliga"));
        reg.insert(stop("S01", "Delap"));
        reg.insert(stop("S03", "Rita"));

        let names: Vec<&str> = reg.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Uliga", "Delap", "Rita"]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut reg = StopRegistry::new();
        reg.insert(stop("S01", "Delap"));
        reg.insert(stop("S02", "Uliga"));
        reg.insert(stop("S99", "Delap")); // same name, new code

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("Delap").unwrap().id, "S99");
        // Position unchanged: Delap still first.
        assert_eq!(reg.iter().next().unwrap().name, "Delap");
    }

    #[test]
    fn lookup_by_name() {
        let mut reg = StopRegistry::new();
        reg.insert(stop("S01", "Delap"));
        assert!(reg.contains("Delap"));
        assert!(reg.get("Laura").is_none());
    }
}

// ── Workbook reader ───────────────────────────────────────────────────────────

#[cfg(test)]
mod workbook_reader {
    use super::*;

    #[test]
    fn parses_all_three_tables() {
        let csv = workbook(
            "S01,Delap,7.0897,171.3803,Delap,Uliga,3.0,Delap,Uliga,,\n\
             S02,Uliga,7.1031,171.3687,Uliga,Rita,2.4,Uliga,Rita,Rita,Uliga\n\
             S03,Rita,7.1175,171.3570,,,,,,Uliga,Delap\n",
        );
        let wb = read_workbook_reader(Cursor::new(csv)).unwrap();

        assert_eq!(wb.stops.len(), 3);
        assert_eq!(wb.stops.get("Delap").unwrap().id, "S01");
        assert_eq!(wb.stops.get("Rita").unwrap().pos, GeoPoint::new(7.1175, 171.3570));

        let a = wb.segments(Route::A);
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].from, "Delap");
        assert_eq!(a[0].distance_km, 3.0);
        assert_eq!(a[1].to, "Rita");
    }

    #[test]
    fn missing_columns_is_fatal_and_structured() {
        let csv = "stop_id,stop_name,stop_lat,stop_lon\nS01,Delap,7.0,171.3\n";
        let err = read_workbook_reader(Cursor::new(csv)).unwrap_err();
        match err {
            ModelError::MissingColumns(cols) => {
                assert!(cols.contains(&"dist_from".to_owned()));
                assert!(cols.contains(&"route_b_to".to_owned()));
                assert!(!cols.contains(&"stop_id".to_owned()));
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn empty_stop_set_is_fatal() {
        // Rows present but no parsable stop entries.
        let csv = workbook(",,,,Delap,Uliga,3.0,Delap,Uliga,,\n");
        let err = read_workbook_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ModelError::NoStops));
    }

    #[test]
    fn malformed_cells_drop_only_their_table_entry() {
        // Bad latitude: the stop entry dies, the distance + itinerary entries
        // on the same row survive.
        let csv = workbook(
            "S01,Delap,not-a-number,171.3803,Delap,Uliga,3.0,Delap,Uliga,,\n\
             S02,Uliga,7.1031,171.3687,,,,,,,\n",
        );
        let wb = read_workbook_reader(Cursor::new(csv)).unwrap();
        assert_eq!(wb.stops.len(), 1); // only Uliga
        assert_eq!(wb.segments(Route::A).len(), 1); // Delap->Uliga kept
    }

    #[test]
    fn unresolvable_segment_is_dropped_not_fabricated() {
        // Route A references Delap->Laura but the distance table has no such
        // pair: the segment must be dropped, not given a made-up distance.
        let csv = workbook(
            "S01,Delap,7.0897,171.3803,Delap,Uliga,3.0,Delap,Laura,,\n\
             S02,Uliga,7.1031,171.3687,,,,Delap,Uliga,,\n",
        );
        let wb = read_workbook_reader(Cursor::new(csv)).unwrap();
        let a = wb.segments(Route::A);
        assert_eq!(a.len(), 1);
        assert_eq!((a[0].from.as_str(), a[0].to.as_str()), ("Delap", "Uliga"));
    }

    #[test]
    fn malformed_distance_value_skips_entry() {
        let csv = workbook(
            "S01,Delap,7.0897,171.3803,Delap,Uliga,3.O,Delap,Uliga,,\n\
             S02,Uliga,7.1031,171.3687,,,,,,,\n",
        );
        let wb = read_workbook_reader(Cursor::new(csv)).unwrap();
        // Distance cell was junk, so the itinerary reference can't resolve.
        assert!(wb.segments(Route::A).is_empty());
    }

    #[test]
    fn whitespace_is_trimmed_around_names() {
        let csv = workbook(
            "S01, Delap ,7.0897,171.3803, Delap , Uliga ,3.0, Delap , Uliga ,,\n\
             S02,Uliga,7.1031,171.3687,,,,,,,\n",
        );
        let wb = read_workbook_reader(Cursor::new(csv)).unwrap();
        assert!(wb.stops.contains("Delap"));
        assert_eq!(wb.segments(Route::A).len(), 1);
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn identifiers() {
        assert_eq!(Route::A.id(), "ROUTE_A");
        assert_eq!(Route::B.short_name(), "B");
        assert_eq!(Route::B.long_name(), "Route B");
        assert_eq!(Route::A.to_string(), "ROUTE_A");
    }

    #[test]
    fn only_route_b_is_bidirectional() {
        assert!(!Route::A.bidirectional());
        assert!(Route::B.bidirectional());
    }
}
