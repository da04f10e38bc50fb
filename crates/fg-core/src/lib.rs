//! `fg-core` — foundational types for the feedgen transit-schedule toolchain.
//!
//! This crate is a dependency of every other `fg-*` crate.  It intentionally
//! has no `fg-*` dependencies and minimal external ones (only `thiserror` and
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`time`]   | minutes-based time model, `TimeOfDay`, `ServiceWindow`   |
//! | [`geo`]    | `GeoPoint` coordinate pair                               |
//! | [`config`] | `GenerateConfig` — the process-boundary configuration    |
//! | [`error`]  | `CoreError`, `CoreResult`                                |

pub mod config;
pub mod error;
pub mod geo;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GenerateConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use time::{fmt_offset_time, Break, ServiceWindow, TimeOfDay};
