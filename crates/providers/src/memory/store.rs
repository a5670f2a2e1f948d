// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::contracts::AppointmentStore;
use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::{
    Appointment, AppointmentId, AppointmentStatus, BarberId, DomainError, NewAppointment,
    ServiceRating, TimeOfDay, validate_new_appointment, validate_slot_free,
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::{Date, PrimitiveDateTime};
use tracing::{debug, info};

/// The store's guarded interior.
#[derive(Debug)]
struct StoreInner {
    /// All appointments in insertion order.
    appointments: Vec<Appointment>,
    /// The next identifier to assign.
    next_id: i64,
}

/// An in-memory appointment store.
///
/// Identifiers are assigned from an incrementing counter, so insertion
/// order and identifier order coincide.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                appointments: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store seeded with existing appointments.
    ///
    /// The identifier counter continues after the highest seeded id.
    #[must_use]
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        let next_id: i64 = appointments
            .iter()
            .map(|a| a.id.value())
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self {
            inner: Mutex::new(StoreInner {
                appointments,
                next_id,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update_status<F>(&self, id: AppointmentId, op: F) -> Result<Appointment, ProviderError>
    where
        F: FnOnce(&mut Appointment) -> Result<(), DomainError>,
    {
        let mut inner: MutexGuard<'_, StoreInner> = self.lock();
        let appointment: &mut Appointment = inner
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DomainError::AppointmentNotFound(id.value()))?;
        op(appointment)?;
        Ok(appointment.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentStore for MemoryStore {
    async fn create(&self, draft: NewAppointment) -> Result<Appointment, ProviderError> {
        validate_new_appointment(&draft)?;

        let mut inner: MutexGuard<'_, StoreInner> = self.lock();
        validate_slot_free(&draft, &inner.appointments)?;

        let id: AppointmentId = AppointmentId::new(inner.next_id);
        inner.next_id += 1;

        let appointment: Appointment = Appointment::scheduled(id, draft);
        inner.appointments.push(appointment.clone());

        info!(
            appointment_id = id.value(),
            barber = %appointment.barber_id,
            date = %appointment.date,
            time = %appointment.time,
            "Created appointment"
        );

        Ok(appointment)
    }

    async fn cancel(&self, id: AppointmentId) -> Result<Appointment, ProviderError> {
        let appointment: Appointment = self.update_status(id, Appointment::cancel)?;
        info!(appointment_id = id.value(), "Cancelled appointment");
        Ok(appointment)
    }

    async fn complete(&self, id: AppointmentId) -> Result<Appointment, ProviderError> {
        let appointment: Appointment = self.update_status(id, Appointment::complete)?;
        info!(appointment_id = id.value(), "Completed appointment");
        Ok(appointment)
    }

    async fn rate(
        &self,
        id: AppointmentId,
        rating: ServiceRating,
    ) -> Result<Appointment, ProviderError> {
        let appointment: Appointment = self.update_status(id, |a| a.rate(rating))?;
        info!(
            appointment_id = id.value(),
            rating = rating.value(),
            "Rated appointment"
        );
        Ok(appointment)
    }

    async fn list(&self) -> Result<Vec<Appointment>, ProviderError> {
        Ok(self.lock().appointments.clone())
    }

    async fn next_scheduled(
        &self,
        now: PrimitiveDateTime,
    ) -> Result<Option<Appointment>, ProviderError> {
        let inner: MutexGuard<'_, StoreInner> = self.lock();
        let next: Option<Appointment> = inner
            .appointments
            .iter()
            .filter(|a| {
                a.status == AppointmentStatus::Scheduled
                    && PrimitiveDateTime::new(a.date, a.time.as_time()) >= now
            })
            .min_by_key(|a| a.chronological_key())
            .cloned();
        Ok(next)
    }

    async fn booked_times(
        &self,
        barber_id: &BarberId,
        date: Date,
    ) -> Result<Vec<TimeOfDay>, ProviderError> {
        let inner: MutexGuard<'_, StoreInner> = self.lock();
        let mut times: Vec<TimeOfDay> = inner
            .appointments
            .iter()
            .filter(|a| a.status.occupies_slot() && a.barber_id == *barber_id && a.date == date)
            .map(|a| a.time)
            .collect();
        times.sort_unstable();
        debug!(
            barber = %barber_id,
            date = %date,
            occupied = times.len(),
            "Collected booked times"
        );
        Ok(times)
    }
}
