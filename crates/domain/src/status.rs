// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appointment status tracking and transition logic.
//!
//! This module defines appointment status states and valid transitions.
//! Status transitions are client- or operator-initiated only; the system
//! never advances status based on time alone.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Appointment status states.
///
/// An appointment is created as `Scheduled` and may move to exactly one of
/// the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// The appointment is booked and in the future.
    Scheduled,
    /// The client was served.
    Completed,
    /// The appointment was called off; its slot is free again.
    Cancelled,
}

impl AppointmentStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAppointmentStatus` if the string is not
    /// a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidAppointmentStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true if an appointment with this status occupies its slot.
    ///
    /// Only cancellation releases a slot; completed appointments keep theirs
    /// so that history stays consistent with what was actually booked.
    #[must_use]
    pub const fn occupies_slot(&self) -> bool {
        match self {
            Self::Scheduled | Self::Completed => true,
            Self::Cancelled => false,
        }
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid = match self {
            Self::Scheduled => matches!(new_status, Self::Completed | Self::Cancelled),
            Self::Completed | Self::Cancelled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by status lifecycle rules".to_string(),
            })
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            AppointmentStatus::Scheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ];

        for status in statuses {
            let s = status.as_str();
            match AppointmentStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = AppointmentStatus::parse_str("agendado");
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!AppointmentStatus::Scheduled.is_terminal());
        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_valid_transitions_from_scheduled() {
        let current = AppointmentStatus::Scheduled;

        assert!(
            current
                .validate_transition(AppointmentStatus::Completed)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(AppointmentStatus::Cancelled)
                .is_ok()
        );
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        let terminal_states = vec![AppointmentStatus::Completed, AppointmentStatus::Cancelled];

        for terminal in terminal_states {
            assert!(
                terminal
                    .validate_transition(AppointmentStatus::Scheduled)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(AppointmentStatus::Completed)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(AppointmentStatus::Cancelled)
                    .is_err()
            );
        }
    }

    #[test]
    fn test_cancelled_releases_slot() {
        assert!(AppointmentStatus::Scheduled.occupies_slot());
        assert!(AppointmentStatus::Completed.occupies_slot());
        assert!(!AppointmentStatus::Cancelled.occupies_slot());
    }
}
