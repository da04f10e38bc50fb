//! The two expansion passes, as pure functions of an explicit base.
//!
//! Pass 1 (update): source-bus rows get their own offset applied.
//! Pass 2 (derive): each derived bus gets a copy of its source's *base* rows,
//! token-substituted and shifted by the derived bus's offset.
//!
//! Output ordering is part of the contract with downstream consumers:
//! `stop_times` appends the derived rows grouped per derived token after all
//! updated base rows, while `trips` appends derived rows in base order (one
//! per matching source row, derived tokens in table order).

use fg_core::TimeOfDay;
use fg_output::{StopTimeRow, TripRow};

use crate::error::ExpandResult;
use crate::offsets::{BusOffset, BusOffsetTable};

/// Shift an `HH:MM:SS` value by `minutes`, wrapping modulo 24 hours.
fn shift_time(value: &str, minutes: i64) -> ExpandResult<String> {
    Ok(TimeOfDay::parse(value)?.shift_minutes(minutes).to_string())
}

fn shifted_copy(row: &StopTimeRow, entry: &BusOffset, source: &str) -> ExpandResult<StopTimeRow> {
    Ok(StopTimeRow {
        trip_id: row.trip_id.replace(source, &entry.token),
        arrival_time: shift_time(&row.arrival_time, entry.offset_min)?,
        departure_time: shift_time(&row.departure_time, entry.offset_min)?,
        stop_id: row.stop_id.clone(),
        stop_sequence: row.stop_sequence,
    })
}

// ── stop_times ────────────────────────────────────────────────────────────────

/// Expand a base `stop_times` table to the full fleet.
///
/// Rows whose `trip_id` carries no recognized source token pass through
/// unchanged and are never duplicated.  With N recognized source rows and K
/// derived buses covering those sources, exactly N rows are appended.
pub fn expand_stop_times(
    base: &[StopTimeRow],
    table: &BusOffsetTable,
) -> ExpandResult<Vec<StopTimeRow>> {
    let mut out = Vec::with_capacity(base.len() * 2);

    // Pass 1: apply each source bus's own stagger.
    for row in base {
        match table.source_in(&row.trip_id) {
            Some(entry) => out.push(shifted_copy(row, entry, &entry.token)?),
            None => out.push(row.clone()),
        }
    }

    // Pass 2: derive the extra buses from the unshifted base rows.
    for derived in table.derived() {
        let source = derived.derived_from.as_deref().unwrap_or_default();
        for row in base {
            if table.source_in(&row.trip_id).is_some_and(|e| e.token == source) {
                out.push(shifted_copy(row, derived, source)?);
            }
        }
    }

    Ok(out)
}

// ── trips ─────────────────────────────────────────────────────────────────────

/// Expand a base `trips` table to the full fleet.
///
/// Base rows are kept verbatim (trips carry no times); each source row then
/// contributes one derived row per derived bus mapped to it.
pub fn expand_trips(base: &[TripRow], table: &BusOffsetTable) -> Vec<TripRow> {
    let mut out: Vec<TripRow> = base.to_vec();

    for row in base {
        let Some(source) = table.source_in(&row.trip_id) else {
            continue;
        };
        for derived in table.derived() {
            if derived.derived_from.as_deref() == Some(source.token.as_str()) {
                let mut copy = row.clone();
                copy.trip_id = row.trip_id.replace(&source.token, &derived.token);
                out.push(copy);
            }
        }
    }

    out
}

// ── Re-run hygiene ────────────────────────────────────────────────────────────

/// Drop rows produced by a previous expansion, leaving only base rows.
pub fn strip_derived_trips(rows: Vec<TripRow>, table: &BusOffsetTable) -> Vec<TripRow> {
    rows.into_iter()
        .filter(|r| !table.is_derived(&r.trip_id))
        .collect()
}

/// Drop stop-time rows produced by a previous expansion.
pub fn strip_derived_stop_times(
    rows: Vec<StopTimeRow>,
    table: &BusOffsetTable,
) -> Vec<StopTimeRow> {
    rows.into_iter()
        .filter(|r| !table.is_derived(&r.trip_id))
        .collect()
}
