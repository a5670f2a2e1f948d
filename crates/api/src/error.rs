// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the boundary layer.

use navalha::CoreError;
use navalha_domain::DomainError;
use navalha_providers::ProviderError;

/// Boundary-layer errors.
///
/// These are distinct from domain/core errors and represent the contract
/// surfaced to a UI: every variant is recoverable at that boundary. The
/// wizard never resets itself on any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The target slot is no longer available.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An illegal state transition was requested.
    InvalidState {
        /// A human-readable description of the violation.
        message: String,
    },
    /// A submit call is already outstanding.
    SubmissionInProgress,
    /// A provider call failed at the transport level. Transient; the user
    /// may retry the action.
    Transport {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the machine-readable kind carried on the wire.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => "not_found",
            Self::InvalidInput { .. } => "validation",
            Self::Conflict { .. } => "conflict",
            Self::InvalidState { .. } => "invalid_state",
            Self::SubmissionInProgress => "in_flight",
            Self::Transport { .. } => "transport",
            Self::Internal { .. } => "internal",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::InvalidState { message } => write!(f, "Invalid state: {message}"),
            Self::SubmissionInProgress => {
                write!(f, "A submission is already in progress")
            }
            Self::Transport { message } => write!(f, "Transport failure: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into a boundary error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::BarberNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Barber"),
            message: format!("Barber '{id}' does not exist"),
        },
        DomainError::ServiceNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Service"),
            message: format!("Service '{id}' does not exist"),
        },
        DomainError::AppointmentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Appointment"),
            message: format!("Appointment {id} does not exist"),
        },
        DomainError::MissingField { field } => ApiError::InvalidInput {
            field: String::from(field),
            message: format!("Required booking field '{field}' is missing"),
        },
        DomainError::InvalidClientName(msg) => ApiError::InvalidInput {
            field: String::from("client_name"),
            message: msg,
        },
        DomainError::InvalidClientPhone(msg) => ApiError::InvalidInput {
            field: String::from("client_phone"),
            message: msg,
        },
        DomainError::SlotUnavailable {
            barber_id,
            date,
            time,
        } => ApiError::Conflict {
            message: format!(
                "Slot {time} on {date} is no longer available for barber '{}'",
                barber_id.value()
            ),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::InvalidState {
            message: format!("Cannot transition appointment from {from} to {to}: {reason}"),
        },
        DomainError::InvalidAppointmentStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid appointment status: '{status}'"),
        },
        DomainError::InvalidRating { value } => ApiError::InvalidInput {
            field: String::from("rating"),
            message: format!("Invalid rating: {value}. Must be between 1 and 5"),
        },
        DomainError::RatingBeforeCompletion { status } => ApiError::InvalidState {
            message: format!("Cannot rate an appointment with status '{status}'"),
        },
        DomainError::InvalidAverageRating { tenths } => ApiError::InvalidInput {
            field: String::from("rating"),
            message: format!("Invalid average rating in tenths: {tenths}"),
        },
        DomainError::InvalidServiceDuration { minutes } => ApiError::InvalidInput {
            field: String::from("duration_minutes"),
            message: format!("Invalid service duration: {minutes} minutes"),
        },
        DomainError::InvalidOpeningHours { open, close } => ApiError::InvalidInput {
            field: String::from("opening_hours"),
            message: format!("Closes at {close} but opens at {open}"),
        },
        DomainError::InvalidSlotGranularity { minutes } => ApiError::InvalidInput {
            field: String::from("slot_granularity"),
            message: format!("Invalid slot granularity: {minutes} minutes"),
        },
        DomainError::InvalidRole(msg) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Invalid role: {msg}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::TimeParseError { time_string, error } => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("Failed to parse time '{time_string}': {error}"),
        },
    }
}

/// Translates a wizard core error into a boundary error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::CommandNotAllowed { step, command } => ApiError::InvalidState {
            message: format!("Command '{command}' is not allowed in step '{step}'"),
        },
        CoreError::SubmitNotAllowed { step } => ApiError::InvalidState {
            message: format!("Cannot submit from step '{step}'"),
        },
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Domain(domain_err) => translate_domain_error(domain_err),
            ProviderError::Transport(e) => Self::Transport {
                message: e.to_string(),
            },
            ProviderError::Decode { message } => Self::Internal { message },
            ProviderError::Remote { kind, message } => match kind.as_str() {
                "not_found" => Self::ResourceNotFound {
                    resource_type: String::from("Resource"),
                    message,
                },
                "validation" => Self::InvalidInput {
                    field: String::from("request"),
                    message,
                },
                "conflict" => Self::Conflict { message },
                "invalid_state" => Self::InvalidState { message },
                _ => Self::Internal { message },
            },
        }
    }
}
