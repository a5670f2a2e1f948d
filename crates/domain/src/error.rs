// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BarberId, TimeOfDay};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Barber does not exist in the catalog.
    BarberNotFound(String),
    /// Service does not exist in the catalog.
    ServiceNotFound(String),
    /// Appointment does not exist in the store.
    AppointmentNotFound(i64),
    /// A required booking field is missing or blank.
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// Client name is empty or invalid.
    InvalidClientName(String),
    /// Client phone is empty or invalid.
    InvalidClientPhone(String),
    /// The target slot is already occupied by a non-cancelled appointment.
    SlotUnavailable {
        /// The barber the slot belongs to.
        barber_id: BarberId,
        /// The calendar date of the slot.
        date: time::Date,
        /// The time of day of the slot.
        time: TimeOfDay,
    },
    /// An appointment status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// Failed to parse an appointment status from a string.
    InvalidAppointmentStatus {
        /// The invalid status string.
        status: String,
    },
    /// Service rating is outside the permitted 1-5 range.
    InvalidRating {
        /// The invalid rating value.
        value: u8,
    },
    /// A rating was given before the appointment was completed.
    RatingBeforeCompletion {
        /// The appointment's current status.
        status: String,
    },
    /// Barber average rating is outside the 0.0-5.0 range.
    InvalidAverageRating {
        /// The invalid value, in tenths.
        tenths: u8,
    },
    /// Service duration must be a positive number of minutes.
    InvalidServiceDuration {
        /// The invalid duration value.
        minutes: u32,
    },
    /// Opening hours must close after they open.
    InvalidOpeningHours {
        /// The opening time.
        open: TimeOfDay,
        /// The closing time.
        close: TimeOfDay,
    },
    /// Slot granularity is outside the permitted range.
    InvalidSlotGranularity {
        /// The invalid granularity in minutes.
        minutes: u16,
    },
    /// Failed to parse a role from a string.
    InvalidRole(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time of day from a string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BarberNotFound(id) => write!(f, "Barber '{id}' not found"),
            Self::ServiceNotFound(id) => write!(f, "Service '{id}' not found"),
            Self::AppointmentNotFound(id) => write!(f, "Appointment {id} not found"),
            Self::MissingField { field } => {
                write!(f, "Required booking field '{field}' is missing")
            }
            Self::InvalidClientName(msg) => write!(f, "Invalid client name: {msg}"),
            Self::InvalidClientPhone(msg) => write!(f, "Invalid client phone: {msg}"),
            Self::SlotUnavailable {
                barber_id,
                date,
                time,
            } => {
                write!(
                    f,
                    "Slot {time} on {date} is no longer available for barber '{}'",
                    barber_id.value()
                )
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition appointment from {from} to {to}: {reason}")
            }
            Self::InvalidAppointmentStatus { status } => {
                write!(f, "Invalid appointment status: '{status}'")
            }
            Self::InvalidRating { value } => {
                write!(f, "Invalid rating: {value}. Must be between 1 and 5")
            }
            Self::RatingBeforeCompletion { status } => {
                write!(
                    f,
                    "Cannot rate an appointment with status '{status}': only completed appointments can be rated"
                )
            }
            Self::InvalidAverageRating { tenths } => {
                write!(
                    f,
                    "Invalid average rating: {}.{}. Must be between 0.0 and 5.0",
                    tenths / 10,
                    tenths % 10
                )
            }
            Self::InvalidServiceDuration { minutes } => {
                write!(
                    f,
                    "Invalid service duration: {minutes} minutes. Must be greater than 0"
                )
            }
            Self::InvalidOpeningHours { open, close } => {
                write!(
                    f,
                    "Invalid opening hours: closes at {close} but opens at {open}"
                )
            }
            Self::InvalidSlotGranularity { minutes } => {
                write!(
                    f,
                    "Invalid slot granularity: {minutes} minutes. Must be between 1 and 720"
                )
            }
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
