// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use navalha_domain::{BarberId, ClientContact, DomainError, NewAppointment, ServiceId, TimeOfDay};
use time::Date;

/// The steps of the booking wizard.
///
/// The five collecting steps run in a fixed order; `Submitted` and
/// `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Choosing a barber.
    SelectBarber,
    /// Choosing a service.
    SelectService,
    /// Choosing a date and a time slot.
    SelectDateTime,
    /// Entering the client's name and phone.
    EnterContact,
    /// Reviewing the summary before submitting.
    Confirm,
    /// The booking was persisted.
    Submitted,
    /// The user aborted the flow.
    Cancelled,
}

impl WizardStep {
    /// Returns the string representation of the step.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelectBarber => "select_barber",
            Self::SelectService => "select_service",
            Self::SelectDateTime => "select_date_time",
            Self::EnterContact => "enter_contact",
            Self::Confirm => "confirm",
            Self::Submitted => "submitted",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true if this step is terminal (accepts no further commands).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted | Self::Cancelled)
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The wizard's in-progress, not-yet-persisted booking data.
///
/// All fields are optional until the corresponding step fills them in.
/// The draft is discarded on abort and replaced after a successful
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingDraft {
    /// The chosen barber.
    pub barber_id: Option<BarberId>,
    /// The chosen service.
    pub service_id: Option<ServiceId>,
    /// The chosen date.
    pub date: Option<Date>,
    /// The chosen time slot.
    pub time: Option<TimeOfDay>,
    /// The client's full name.
    pub client_name: String,
    /// The client's phone number.
    pub client_phone: String,
}

impl BookingDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a draft with the client's contact prefilled.
    #[must_use]
    pub fn with_contact(contact: ClientContact) -> Self {
        Self {
            client_name: contact.name,
            client_phone: contact.phone,
            ..Self::default()
        }
    }

    /// Converts the draft into a store-ready `NewAppointment`.
    ///
    /// This is the defensive re-check performed at submit time: every
    /// required field must still be present even though the step guards
    /// already enforced them on the way here.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` naming the first absent field.
    pub fn complete(&self) -> Result<NewAppointment, DomainError> {
        let barber_id: BarberId = self
            .barber_id
            .clone()
            .ok_or(DomainError::MissingField { field: "barber" })?;
        let service_id: ServiceId = self
            .service_id
            .clone()
            .ok_or(DomainError::MissingField { field: "service" })?;
        let date: Date = self.date.ok_or(DomainError::MissingField { field: "date" })?;
        let time: TimeOfDay = self.time.ok_or(DomainError::MissingField { field: "time" })?;

        if self.client_name.trim().is_empty() {
            return Err(DomainError::MissingField {
                field: "client_name",
            });
        }
        if self.client_phone.trim().is_empty() {
            return Err(DomainError::MissingField {
                field: "client_phone",
            });
        }

        Ok(NewAppointment {
            barber_id,
            service_id,
            date,
            time,
            client_name: self.client_name.clone(),
            client_phone: self.client_phone.clone(),
        })
    }
}

/// The complete wizard state: current step, draft, and the optional
/// caller-fixed barber.
///
/// State values are immutable; `apply` produces a new state for each
/// accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// The current step.
    pub step: WizardStep,
    /// The in-progress draft.
    pub draft: BookingDraft,
    /// A barber fixed by the caller before the flow started.
    ///
    /// When set, the flow starts at `SelectService` and never steps back
    /// into barber selection.
    pub preselected: Option<BarberId>,
}

impl WizardState {
    /// Creates a wizard starting at barber selection.
    ///
    /// `prefill` carries the client's stored contact details, if any.
    #[must_use]
    pub fn new(prefill: Option<ClientContact>) -> Self {
        Self {
            step: WizardStep::SelectBarber,
            draft: prefill.map_or_else(BookingDraft::empty, BookingDraft::with_contact),
            preselected: None,
        }
    }

    /// Creates a wizard with the barber fixed by the caller.
    ///
    /// The flow starts at service selection.
    #[must_use]
    pub fn for_barber(barber_id: BarberId, prefill: Option<ClientContact>) -> Self {
        let mut draft: BookingDraft =
            prefill.map_or_else(BookingDraft::empty, BookingDraft::with_contact);
        draft.barber_id = Some(barber_id.clone());
        Self {
            step: WizardStep::SelectService,
            draft,
            preselected: Some(barber_id),
        }
    }

    /// Returns the step this wizard starts (and resets) to.
    #[must_use]
    pub const fn initial_step(&self) -> WizardStep {
        if self.preselected.is_some() {
            WizardStep::SelectService
        } else {
            WizardStep::SelectBarber
        }
    }

    /// Returns true if the current step's required fields are filled.
    ///
    /// A UI uses this to enable or disable its continue action; the
    /// `Continue` command itself is a no-op while this is false.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        match self.step {
            WizardStep::SelectBarber => self.draft.barber_id.is_some(),
            WizardStep::SelectService => self.draft.service_id.is_some(),
            WizardStep::SelectDateTime => self.draft.date.is_some() && self.draft.time.is_some(),
            WizardStep::EnterContact => {
                !self.draft.client_name.trim().is_empty()
                    && !self.draft.client_phone.trim().is_empty()
            }
            WizardStep::Confirm
            | WizardStep::Submitted
            | WizardStep::Cancelled => false,
        }
    }

    /// Converts the draft for submission.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SubmitNotAllowed` unless the wizard is on
    /// `Confirm`, or `CoreError::DomainViolation` if a required field went
    /// missing.
    pub fn complete_draft(&self) -> Result<NewAppointment, CoreError> {
        if self.step != WizardStep::Confirm {
            return Err(CoreError::SubmitNotAllowed { step: self.step });
        }
        self.draft.complete().map_err(CoreError::DomainViolation)
    }

    /// Marks the wizard as submitted.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SubmitNotAllowed` unless the wizard is on
    /// `Confirm`.
    pub fn mark_submitted(&self) -> Result<Self, CoreError> {
        if self.step != WizardStep::Confirm {
            return Err(CoreError::SubmitNotAllowed { step: self.step });
        }
        let mut next: Self = self.clone();
        next.step = WizardStep::Submitted;
        Ok(next)
    }

    /// Returns a fresh wizard for the next booking.
    ///
    /// The step returns to the initial step, the preselected barber (if
    /// any) is re-applied, and the client's contact details are kept as
    /// prefill. Everything else is cleared.
    #[must_use]
    pub fn reset(&self) -> Self {
        let contact: Option<ClientContact> = if self.draft.client_name.is_empty() {
            None
        } else {
            Some(ClientContact::new(
                self.draft.client_name.clone(),
                self.draft.client_phone.clone(),
            ))
        };

        match self.preselected.clone() {
            Some(barber_id) => Self::for_barber(barber_id, contact),
            None => Self::new(contact),
        }
    }
}
