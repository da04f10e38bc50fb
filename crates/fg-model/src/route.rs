//! The two fixed routes served by the network.
//!
//! Route A is a one-directional loop; Route B is an out-and-back line whose
//! return direction is synthesized by reversing the forward itinerary.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    A,
    B,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::A, Route::B];

    /// Stable identifier used in `routes.txt` and trip ids.
    pub fn id(self) -> &'static str {
        match self {
            Route::A => "ROUTE_A",
            Route::B => "ROUTE_B",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Route::A => "A",
            Route::B => "B",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            Route::A => "Route A",
            Route::B => "Route B",
        }
    }

    /// Whether return-direction trips are synthesized for this route.
    pub fn bidirectional(self) -> bool {
        matches!(self, Route::B)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
