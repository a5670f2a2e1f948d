// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator contracts consumed by the booking flow.
//!
//! Each contract has two implementations: an in-memory fixture (`memory`)
//! and a remote client (`http`), selected by dependency injection. The
//! flow is agnostic to which one it is handed.

use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::{
    Appointment, AppointmentId, Barber, BarberId, ClientContact, ConfirmationPayload,
    NewAppointment, Service, ServiceId, ServiceRating, ShopSchedule, TimeOfDay,
};
use time::{Date, PrimitiveDateTime};

/// Supplies the immutable barber and service lists.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns all barbers.
    async fn list_barbers(&self) -> Result<Vec<Barber>, ProviderError>;

    /// Returns all services.
    async fn list_services(&self) -> Result<Vec<Service>, ProviderError>;

    /// Looks up a single barber.
    async fn barber(&self, id: &BarberId) -> Result<Option<Barber>, ProviderError>;

    /// Looks up a single service.
    async fn service(&self, id: &ServiceId) -> Result<Option<Service>, ProviderError>;
}

/// Supplies the shop's operating hours.
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    /// Returns the current shop schedule.
    async fn shop_schedule(&self) -> Result<ShopSchedule, ProviderError>;
}

/// Owns the user's appointments.
///
/// The store assigns identifiers, enforces the status lifecycle, and
/// re-checks slot availability at create time.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Persists a completed draft as a freshly scheduled appointment.
    ///
    /// # Errors
    ///
    /// Fails with a validation error if a required field is blank, or with
    /// `DomainError::SlotUnavailable` if a non-cancelled appointment
    /// already occupies the draft's `(barber, date, time)`.
    async fn create(&self, draft: NewAppointment) -> Result<Appointment, ProviderError>;

    /// Cancels a scheduled appointment. Irreversible.
    ///
    /// # Errors
    ///
    /// Fails with `DomainError::AppointmentNotFound` for an unknown id, or
    /// with `DomainError::InvalidStatusTransition` if the appointment is
    /// not currently scheduled.
    async fn cancel(&self, id: AppointmentId) -> Result<Appointment, ProviderError>;

    /// Marks a scheduled appointment as completed.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AppointmentStore::cancel`].
    async fn complete(&self, id: AppointmentId) -> Result<Appointment, ProviderError>;

    /// Records the client's rating for a completed appointment.
    ///
    /// # Errors
    ///
    /// Fails with `DomainError::RatingBeforeCompletion` unless the
    /// appointment has been completed.
    async fn rate(
        &self,
        id: AppointmentId,
        rating: ServiceRating,
    ) -> Result<Appointment, ProviderError>;

    /// Returns all appointments in insertion order.
    async fn list(&self) -> Result<Vec<Appointment>, ProviderError>;

    /// Returns the scheduled appointment with the earliest `(date, time)`
    /// at or after `now`, tie-broken by identifier.
    ///
    /// `now` is always supplied by the caller; the store never reads a
    /// clock.
    async fn next_scheduled(
        &self,
        now: PrimitiveDateTime,
    ) -> Result<Option<Appointment>, ProviderError>;

    /// Returns the occupied times for one barber on one date, sorted
    /// chronologically. Cancelled appointments do not occupy times.
    async fn booked_times(
        &self,
        barber_id: &BarberId,
        date: Date,
    ) -> Result<Vec<TimeOfDay>, ProviderError>;
}

/// Persists the client's contact details for booking prefill.
#[async_trait]
pub trait UserProfile: Send + Sync {
    /// Stores the contact details. Fire-and-forget from the flow's view.
    async fn set_user_info(&self, contact: ClientContact) -> Result<(), ProviderError>;

    /// Returns the stored contact details, if any.
    async fn user_info(&self) -> Result<Option<ClientContact>, ProviderError>;
}

/// Receives the confirmation payload after a successful booking.
///
/// Formatting and transport of the confirmation are the sink's concern;
/// the flow only constructs and hands off the payload.
#[async_trait]
pub trait ConfirmationSink: Send + Sync {
    /// Delivers one confirmation payload.
    async fn deliver(&self, payload: ConfirmationPayload) -> Result<(), ProviderError>;
}
