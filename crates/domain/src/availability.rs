// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate slot generation.
//!
//! This module produces the candidate time grid for one barber on one date
//! and flags each candidate against the set of occupied times.
//!
//! ## Invariants
//!
//! - Candidates are generated strictly chronologically at the configured
//!   granularity, from opening time up to (excluding) closing time.
//! - A closed shop, or a Sunday, yields no candidates.
//! - A candidate is unavailable exactly when a non-cancelled appointment
//!   occupies the same `(barber, date, time)`; the occupied set is supplied
//!   by the caller, keeping this module free of side effects.

use crate::schedule::{ShopSchedule, SlotGranularity};
use crate::types::TimeOfDay;
use time::Date;

/// A single offerable time for one barber on one date.
///
/// Slots are never persisted; they are recomputed per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// The time of day this slot starts.
    pub time: TimeOfDay,
    /// Whether the slot can currently be booked.
    pub available: bool,
}

/// Generates the chronological candidate times for a date.
///
/// Returns an empty sequence when the shop is closed or the date falls on
/// a Sunday. The result is deterministic for the same inputs.
#[must_use]
pub fn candidate_times(
    schedule: &ShopSchedule,
    date: Date,
    granularity: SlotGranularity,
) -> Vec<TimeOfDay> {
    if !schedule.is_open() {
        return Vec::new();
    }

    let Some(hours) = schedule.hours_for(date.weekday()) else {
        return Vec::new();
    };

    let close: u16 = hours.close().minutes_from_midnight();
    let step: u16 = granularity.minutes();

    let mut times: Vec<TimeOfDay> = Vec::new();
    let mut minute: u16 = hours.open().minutes_from_midnight();
    while minute < close {
        if let Some(time) = TimeOfDay::from_minutes(minute) {
            times.push(time);
        }
        minute = minute.saturating_add(step);
    }

    times
}

/// Flags each candidate time against the occupied set.
///
/// The candidate order is preserved, so the output is chronological
/// whenever the input is.
#[must_use]
pub fn assemble_slots(candidates: Vec<TimeOfDay>, occupied: &[TimeOfDay]) -> Vec<Slot> {
    candidates
        .into_iter()
        .map(|time| Slot {
            time,
            available: !occupied.contains(&time),
        })
        .collect()
}
