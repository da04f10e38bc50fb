//! `fg-expand` — the second pipeline pass: staggering extra buses onto an
//! already-generated feed.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`offsets`] | `BusOffset`, `BusOffsetTable`                           |
//! | [`expander`]| `expand_trips`, `expand_stop_times`, `strip_derived_*`  |
//! | [`error`]   | `ExpandError`, `ExpandResult<T>`                        |
//!
//! # Model
//!
//! The generator emits schedules for the *source* buses (BUS1, BUS2).  This
//! crate derives the remaining fleet by pure record transformation: each
//! source bus's rows are time-shifted by its own offset, and every *derived*
//! bus (BUS3 from BUS1, BUS4 from BUS2) gets a full copy of its source's
//! rows with the bus token substituted in `trip_id` and times shifted by the
//! derived bus's offset — always computed from the unshifted base, never from
//! previously expanded output.  Times wrap modulo 24 hours.
//!
//! Both `expand_*` functions are pure; callers own persistence.  To keep
//! repeated runs from accumulating rows, strip previously derived rows with
//! [`strip_derived_trips`] / [`strip_derived_stop_times`] before expanding.

pub mod error;
pub mod expander;
pub mod offsets;


pub use error::{ExpandError, ExpandResult};
pub use expander::{
    expand_stop_times, expand_trips, strip_derived_stop_times, strip_derived_trips,
};
pub use offsets::{BusOffset, BusOffsetTable};
