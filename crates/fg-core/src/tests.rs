//! Unit tests for fg-core primitives.

#[cfg(test)]
mod time {
    use crate::time::{fmt_offset_time, TimeOfDay};

    #[test]
    fn offset_formatting_truncates_to_whole_minutes() {
        assert_eq!(fmt_offset_time(0.0), "00:00:00");
        assert_eq!(fmt_offset_time(372.0), "06:12:00");
        // 372.9 → 372 whole minutes; no rounding up.
        assert_eq!(fmt_offset_time(372.9), "06:12:00");
    }

    #[test]
    fn offset_formatting_keeps_past_midnight_hours() {
        // 25:30 — GTFS-style hours beyond 23 for a service day crossing
        // midnight.
        assert_eq!(fmt_offset_time(25.0 * 60.0 + 30.0), "25:30:00");
        assert_eq!(fmt_offset_time(26.0 * 60.0), "26:00:00");
    }

    #[test]
    fn parse_roundtrip() {
        let t = TimeOfDay::parse("06:12:00").unwrap();
        assert_eq!(t.to_string(), "06:12:00");
        assert_eq!(t.seconds(), 6 * 3_600 + 12 * 60);
    }

    #[test]
    fn parse_wraps_hours_past_midnight() {
        // 26:00:00 is 02:00 next day; TimeOfDay wraps at parse time.
        let t = TimeOfDay::parse("26:00:00").unwrap();
        assert_eq!(t.to_string(), "02:00:00");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(TimeOfDay::parse("06:12").is_err());
        assert!(TimeOfDay::parse("06:12:00:00").is_err());
        assert!(TimeOfDay::parse("six:12:00").is_err());
        assert!(TimeOfDay::parse("06:61:00").is_err());
    }

    #[test]
    fn shift_wraps_modulo_24h() {
        let t = TimeOfDay::parse("23:50:00").unwrap();
        assert_eq!(t.shift_minutes(15).to_string(), "00:05:00");
        assert_eq!(t.shift_minutes(0).to_string(), "23:50:00");

        let early = TimeOfDay::parse("00:05:00").unwrap();
        assert_eq!(early.shift_minutes(-10).to_string(), "23:55:00");
    }
}

#[cfg(test)]
mod config {
    use crate::GenerateConfig;

    #[test]
    fn defaults_match_production_constants() {
        let cfg = GenerateConfig::default();
        assert_eq!(cfg.speed_kph, 15.0);
        assert_eq!(cfg.service_window.start_min, 360.0);
        assert_eq!(cfg.service_window.end_min, 1560.0);
        assert_eq!(cfg.breaks.len(), 4);
        assert_eq!(cfg.breaks[0].start_min, 540.0);
        assert_eq!(cfg.breaks[0].duration_min, 10.0);
        assert_eq!(cfg.buses_per_route, 2);
        assert_eq!(cfg.bus_start_offset_min, 30.0);
    }
}
