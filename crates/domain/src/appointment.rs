// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The appointment aggregate and its lifecycle operations.
//!
//! An `Appointment` is owned exclusively by the appointment store. After
//! creation it is mutated only through the status transition methods here;
//! once a terminal status is reached no further mutation is permitted,
//! except that a completed appointment may receive a service rating.

use crate::error::DomainError;
use crate::status::AppointmentStatus;
use crate::types::{AppointmentId, BarberId, ServiceId, ServiceRating, TimeOfDay};
use time::Date;

/// A booking draft that passed completion checks, ready for the store.
///
/// This is the input to the store's create operation. It carries no
/// identifier and no status; both are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    /// The booked barber.
    pub barber_id: BarberId,
    /// The booked service.
    pub service_id: ServiceId,
    /// The appointment date.
    pub date: Date,
    /// The appointment time.
    pub time: TimeOfDay,
    /// The client's full name.
    pub client_name: String,
    /// The client's phone number.
    pub client_phone: String,
}

/// A persisted appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    /// The store-assigned identifier.
    pub id: AppointmentId,
    /// The booked barber.
    pub barber_id: BarberId,
    /// The booked service.
    pub service_id: ServiceId,
    /// The appointment date.
    pub date: Date,
    /// The appointment time.
    pub time: TimeOfDay,
    /// The current status.
    pub status: AppointmentStatus,
    /// The client's full name.
    pub client_name: String,
    /// The client's phone number.
    pub client_phone: String,
    /// The client's rating, set after completion.
    pub rating: Option<ServiceRating>,
}

impl Appointment {
    /// Creates a freshly scheduled appointment from a completed draft.
    #[must_use]
    pub fn scheduled(id: AppointmentId, draft: NewAppointment) -> Self {
        Self {
            id,
            barber_id: draft.barber_id,
            service_id: draft.service_id,
            date: draft.date,
            time: draft.time,
            status: AppointmentStatus::Scheduled,
            client_name: draft.client_name,
            client_phone: draft.client_phone,
            rating: None,
        }
    }

    /// Returns true if this appointment occupies the given slot.
    ///
    /// Cancelled appointments never occupy a slot.
    #[must_use]
    pub fn occupies(&self, barber_id: &BarberId, date: Date, time: TimeOfDay) -> bool {
        self.status.occupies_slot()
            && self.barber_id == *barber_id
            && self.date == date
            && self.time == time
    }

    /// Transitions the appointment to `Cancelled`. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the appointment is
    /// not currently scheduled.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.status
            .validate_transition(AppointmentStatus::Cancelled)?;
        self.status = AppointmentStatus::Cancelled;
        Ok(())
    }

    /// Transitions the appointment to `Completed`. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the appointment is
    /// not currently scheduled.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.status
            .validate_transition(AppointmentStatus::Completed)?;
        self.status = AppointmentStatus::Completed;
        Ok(())
    }

    /// Records the client's rating for a completed appointment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RatingBeforeCompletion` if the appointment has
    /// not been completed.
    pub fn rate(&mut self, rating: ServiceRating) -> Result<(), DomainError> {
        if self.status != AppointmentStatus::Completed {
            return Err(DomainError::RatingBeforeCompletion {
                status: self.status.as_str().to_string(),
            });
        }
        self.rating = Some(rating);
        Ok(())
    }

    /// Returns the sort key used for "next scheduled" ordering.
    ///
    /// Appointments order by date, then time, then identifier.
    #[must_use]
    pub const fn chronological_key(&self) -> (Date, TimeOfDay, AppointmentId) {
        (self.date, self.time, self.id)
    }
}
