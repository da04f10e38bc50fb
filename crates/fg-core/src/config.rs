//! Generation configuration.
//!
//! Every tunable the schedule generator consumes lives in one struct,
//! constructed once at the process boundary and passed by reference into the
//! computations.  The application crate may fill it from a config file (serde)
//! or fall back to `Default`, which carries the production constants.

use serde::{Deserialize, Serialize};

use crate::time::{Break, ServiceWindow};

/// Top-level schedule-generation configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Assumed constant average bus speed, km/h.
    pub speed_kph: f64,

    /// Daily service window, minutes since midnight.  The end may exceed
    /// 1440 for past-midnight service.
    pub service_window: ServiceWindow,

    /// Fixed driver rest breaks, shared by all routes and buses.
    pub breaks: Vec<Break>,

    /// How many buses run each route.
    pub buses_per_route: u32,

    /// Stagger between consecutive buses on the same route, minutes.
    /// Bus *n* (0-based) starts `n * bus_start_offset_min` after the window
    /// opens.
    pub bus_start_offset_min: f64,
}

impl Default for GenerateConfig {
    /// The production Majuro network constants: 15 km/h average speed,
    /// 06:00–26:00 service, four 10-minute breaks, two staggered buses per
    /// route.
    fn default() -> Self {
        Self {
            speed_kph: 15.0,
            service_window: ServiceWindow::new(6.0 * 60.0, 26.0 * 60.0),
            breaks: vec![
                Break::new(9.0 * 60.0, 10.0),
                Break::new(12.0 * 60.0, 10.0),
                Break::new(15.0 * 60.0, 10.0),
                Break::new(18.0 * 60.0, 10.0),
            ],
            buses_per_route: 2,
            bus_start_offset_min: 30.0,
        }
    }
}
