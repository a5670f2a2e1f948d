// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::appointment::{Appointment, NewAppointment};
use crate::error::DomainError;

/// Validates that a completed draft's field constraints are met.
///
/// This function checks that required fields are not blank. It does NOT
/// check slot availability (that requires store context).
///
/// # Errors
///
/// Returns an error if:
/// - The barber or service identifier is blank
/// - The client's name is blank
/// - The client's phone is blank
pub fn validate_new_appointment(draft: &NewAppointment) -> Result<(), DomainError> {
    if draft.barber_id.value().trim().is_empty() {
        return Err(DomainError::MissingField { field: "barber" });
    }

    if draft.service_id.value().trim().is_empty() {
        return Err(DomainError::MissingField { field: "service" });
    }

    if draft.client_name.trim().is_empty() {
        return Err(DomainError::InvalidClientName(String::from(
            "Client name cannot be empty",
        )));
    }

    if draft.client_phone.trim().is_empty() {
        return Err(DomainError::InvalidClientPhone(String::from(
            "Client phone cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that a draft's slot is not occupied by an existing appointment.
///
/// This is the double-booking guard applied by the store at create time.
/// This function is pure, deterministic, and has no side effects.
///
/// # Errors
///
/// Returns `DomainError::SlotUnavailable` if any non-cancelled appointment
/// already occupies the draft's `(barber, date, time)`.
pub fn validate_slot_free(
    draft: &NewAppointment,
    existing: &[Appointment],
) -> Result<(), DomainError> {
    let occupied: bool = existing
        .iter()
        .any(|appointment| appointment.occupies(&draft.barber_id, draft.date, draft.time));

    if occupied {
        return Err(DomainError::SlotUnavailable {
            barber_id: draft.barber_id.clone(),
            date: draft.date,
            time: draft.time,
        });
    }

    Ok(())
}
