//! `fg-schedule` — the schedule computation core.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`timeline`]  | `StopTimeEntry`, `stop_timeline`, `travel_time_min`    |
//! | [`reverse`]   | `reverse_timeline` — return-direction synthesis        |
//! | [`generator`] | `trip_starts` — service-window trip placement          |
//! | [`builder`]   | `Trip`, `DaySchedule`, `build_schedule`                |
//!
//! # Pipeline (summary)
//!
//! ```text
//! segments ──stop_timeline──▶ forward template ──┐
//!     │                                          ├─▶ build_schedule ─▶ DaySchedule
//!     └───reverse_timeline──▶ return template ───┘        │
//!                                        trip_starts ◀────┘  (per route × bus)
//! ```
//!
//! Everything here is pure in-memory computation over the parsed [`Workbook`];
//! all I/O lives in `fg-model` (input) and `fg-output` (output).
//!
//! [`Workbook`]: fg_model::Workbook

pub mod builder;
pub mod generator;
pub mod reverse;
pub mod timeline;


pub use builder::{build_schedule, DaySchedule, Direction, RouteStats, Trip};
pub use generator::trip_starts;
pub use reverse::reverse_timeline;
pub use timeline::{stop_timeline, travel_time_min, StopTimeEntry};
