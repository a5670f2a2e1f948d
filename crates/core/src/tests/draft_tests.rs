// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Draft completion (defensive re-check) tests.

use crate::{BookingDraft, CoreError, WizardState, WizardStep};
use navalha_domain::{DomainError, NewAppointment};

use super::helpers::create_confirmed_state;

#[test]
fn test_complete_draft_from_confirm_succeeds() {
    let confirmed: WizardState = create_confirmed_state();
    let draft: NewAppointment = confirmed.complete_draft().unwrap();

    assert_eq!(draft.barber_id.value(), "jardel");
    assert_eq!(draft.service_id.value(), "corte");
    assert_eq!(draft.time.to_string(), "10:00");
    assert_eq!(draft.client_name, "Ana Souza");
}

#[test]
fn test_complete_draft_outside_confirm_fails() {
    let state: WizardState = WizardState::new(None);
    assert!(matches!(
        state.complete_draft(),
        Err(CoreError::SubmitNotAllowed {
            step: WizardStep::SelectBarber,
        })
    ));
}

#[test]
fn test_externally_cleared_field_is_caught_at_submit() {
    // The defensive re-check exists precisely for drafts mutated behind
    // the wizard's back.
    let mut confirmed: WizardState = create_confirmed_state();
    confirmed.draft.client_name = String::new();

    let result = confirmed.complete_draft();
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::MissingField {
            field: "client_name",
        }))
    ));
}

#[test]
fn test_empty_draft_reports_first_missing_field() {
    let draft: BookingDraft = BookingDraft::empty();
    assert!(matches!(
        draft.complete(),
        Err(DomainError::MissingField { field: "barber" })
    ));
}
