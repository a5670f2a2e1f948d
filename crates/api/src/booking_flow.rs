// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking flow session object.
//!
//! `BookingFlow` owns one wizard state and the injected collaborators.
//! Every step before submission is pure local state mutation; the only
//! external reads are the contact prefill at start and the slot lookup in
//! the date/time step. Side effects happen exclusively in [`BookingFlow::submit`].

use crate::availability::available_slots;
use crate::error::{ApiError, translate_core_error};
use navalha::{WizardCommand, WizardState, apply};
use navalha_domain::{
    Appointment, Barber, BarberId, ClientContact, ConfirmationPayload, NewAppointment, Service,
    Slot, SlotGranularity,
};
use navalha_providers::{
    AppointmentStore, CatalogProvider, ConfirmationSink, ScheduleProvider, UserProfile,
};
use std::sync::Arc;
use time::Date;
use tracing::{info, warn};

/// The collaborators a booking flow is wired to.
#[derive(Clone)]
pub struct BookingDeps {
    /// The barber and service catalog.
    pub catalog: Arc<dyn CatalogProvider>,
    /// The shop schedule.
    pub schedule: Arc<dyn ScheduleProvider>,
    /// The appointment store.
    pub store: Arc<dyn AppointmentStore>,
    /// The user profile holding contact prefill.
    pub profile: Arc<dyn UserProfile>,
    /// The confirmation payload sink.
    pub confirmations: Arc<dyn ConfirmationSink>,
}

/// The result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    /// The persisted appointment.
    pub appointment: Appointment,
    /// The payload handed to the confirmation sink.
    pub payload: ConfirmationPayload,
}

/// One booking session: wizard state plus injected collaborators.
pub struct BookingFlow {
    deps: BookingDeps,
    granularity: SlotGranularity,
    state: WizardState,
    /// True while a create call is outstanding.
    submitting: bool,
}

impl BookingFlow {
    /// Starts a flow at barber selection.
    ///
    /// The stored contact details, if readable, prefill the draft. A
    /// failing profile read only costs the prefill.
    pub async fn start(deps: BookingDeps, granularity: SlotGranularity) -> Self {
        let prefill: Option<ClientContact> = Self::read_prefill(&deps).await;
        Self {
            deps,
            granularity,
            state: WizardState::new(prefill),
            submitting: false,
        }
    }

    /// Starts a flow with a caller-fixed barber, at service selection.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if the barber is unknown.
    pub async fn start_with_barber(
        deps: BookingDeps,
        granularity: SlotGranularity,
        barber_id: BarberId,
    ) -> Result<Self, ApiError> {
        if deps.catalog.barber(&barber_id).await?.is_none() {
            return Err(ApiError::ResourceNotFound {
                resource_type: String::from("Barber"),
                message: format!("Barber '{}' does not exist", barber_id.value()),
            });
        }

        let prefill: Option<ClientContact> = Self::read_prefill(&deps).await;
        Ok(Self {
            deps,
            granularity,
            state: WizardState::for_barber(barber_id, prefill),
            submitting: false,
        })
    }

    async fn read_prefill(deps: &BookingDeps) -> Option<ClientContact> {
        match deps.profile.user_info().await {
            Ok(contact) => contact,
            Err(err) => {
                warn!(error = %err, "Could not read contact prefill");
                None
            }
        }
    }

    /// Returns the current wizard state.
    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    /// Applies a wizard command.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SubmissionInProgress` while a create call is
    /// outstanding, or the translated core error for an invalid command.
    pub fn handle(&mut self, command: WizardCommand) -> Result<(), ApiError> {
        if self.submitting {
            return Err(ApiError::SubmissionInProgress);
        }
        self.state = apply(&self.state, command).map_err(translate_core_error)?;
        Ok(())
    }

    /// Returns the bookable slots for the drafted barber on `date`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if no barber has been chosen yet,
    /// or any availability calculator error.
    pub async fn slots(&self, date: Date) -> Result<Vec<Slot>, ApiError> {
        let barber_id: BarberId =
            self.state
                .draft
                .barber_id
                .clone()
                .ok_or_else(|| ApiError::InvalidInput {
                    field: String::from("barber"),
                    message: String::from("Choose a barber before looking up slots"),
                })?;

        available_slots(
            self.deps.catalog.as_ref(),
            self.deps.schedule.as_ref(),
            self.deps.store.as_ref(),
            &barber_id,
            date,
            self.granularity,
        )
        .await
    }

    /// Submits the confirmed draft.
    ///
    /// On success the appointment is persisted, the contact details are
    /// stored for future prefill, the confirmation payload is handed to
    /// the sink, and the wizard resets for the next booking. On a create
    /// failure the wizard stays on the confirmation step with the draft
    /// intact; there is no automatic retry.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SubmissionInProgress` if a create call is
    /// already outstanding, a validation error if the draft lost a
    /// required field, a conflict error if the slot was taken in the
    /// meantime, or a transport error from the store.
    pub async fn submit(&mut self) -> Result<BookingConfirmation, ApiError> {
        if self.submitting {
            return Err(ApiError::SubmissionInProgress);
        }

        let draft: NewAppointment = self.state.complete_draft().map_err(translate_core_error)?;

        // Resolve display names first; these reads have no side effects.
        let barber: Barber = self.deps.catalog.barber(&draft.barber_id).await?.ok_or_else(|| {
            ApiError::ResourceNotFound {
                resource_type: String::from("Barber"),
                message: format!("Barber '{}' does not exist", draft.barber_id.value()),
            }
        })?;
        let service: Service = self
            .deps
            .catalog
            .service(&draft.service_id)
            .await?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Service"),
                message: format!("Service '{}' does not exist", draft.service_id.value()),
            })?;

        self.submitting = true;
        let created = self.deps.store.create(draft.clone()).await;
        self.submitting = false;

        let appointment: Appointment = created.map_err(ApiError::from)?;

        info!(
            appointment_id = appointment.id.value(),
            barber = %appointment.barber_id,
            "Booking submitted"
        );

        // Prefill persistence is fire-and-forget; losing it costs nothing
        // but a retyped name next time.
        let contact: ClientContact =
            ClientContact::new(draft.client_name.clone(), draft.client_phone.clone());
        if let Err(err) = self.deps.profile.set_user_info(contact).await {
            warn!(error = %err, "Could not store contact prefill");
        }

        let payload: ConfirmationPayload = ConfirmationPayload {
            barber_name: barber.name,
            service_name: service.name,
            date: draft.date,
            time: draft.time,
            client_name: draft.client_name,
            client_phone: draft.client_phone,
        };
        if let Err(err) = self.deps.confirmations.deliver(payload.clone()).await {
            warn!(error = %err, "Could not deliver confirmation payload");
        }

        let submitted: WizardState = self.state.mark_submitted().map_err(translate_core_error)?;
        self.state = submitted.reset();

        Ok(BookingConfirmation {
            appointment,
            payload,
        })
    }
}
