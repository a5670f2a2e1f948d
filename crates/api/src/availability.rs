// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability calculator.
//!
//! A pure read over catalog, schedule, and store snapshots: no side
//! effects, chronological output, deterministic for the same inputs.

use crate::error::ApiError;
use navalha_domain::{
    BarberId, ShopSchedule, Slot, SlotGranularity, TimeOfDay, assemble_slots, candidate_times,
};
use navalha_providers::{AppointmentStore, CatalogProvider, ScheduleProvider};
use time::Date;
use tracing::debug;

/// Computes the bookable slots for one barber on one date.
///
/// Candidate times come from the shop schedule at the given granularity;
/// a candidate is available exactly when no non-cancelled appointment
/// occupies it.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the barber is unknown, or a
/// transport error if a provider call fails.
pub async fn available_slots(
    catalog: &dyn CatalogProvider,
    schedule: &dyn ScheduleProvider,
    store: &dyn AppointmentStore,
    barber_id: &BarberId,
    date: Date,
    granularity: SlotGranularity,
) -> Result<Vec<Slot>, ApiError> {
    if catalog.barber(barber_id).await?.is_none() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Barber"),
            message: format!("Barber '{}' does not exist", barber_id.value()),
        });
    }

    let shop_schedule: ShopSchedule = schedule.shop_schedule().await?;
    let candidates: Vec<TimeOfDay> = candidate_times(&shop_schedule, date, granularity);
    let occupied: Vec<TimeOfDay> = store.booked_times(barber_id, date).await?;

    debug!(
        barber = %barber_id,
        date = %date,
        candidates = candidates.len(),
        occupied = occupied.len(),
        "Computed availability"
    );

    Ok(assemble_slots(candidates, &occupied))
}
