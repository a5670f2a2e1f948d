// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wizard transition tests organized by behavior.

use crate::{CoreError, WizardCommand, WizardState, WizardStep, apply};
use navalha_domain::{BarberId, ServiceId, TimeOfDay};
use time::macros::date;

use super::helpers::{create_confirmed_state, create_test_contact};

// ============================================================================
// Initial state
// ============================================================================

#[test]
fn test_fresh_wizard_starts_at_barber_selection() {
    let state: WizardState = WizardState::new(None);
    assert_eq!(state.step, WizardStep::SelectBarber);
    assert!(state.draft.barber_id.is_none());
}

#[test]
fn test_preselected_barber_starts_at_service_selection() {
    let state: WizardState = WizardState::for_barber(BarberId::new("jardel"), None);
    assert_eq!(state.step, WizardStep::SelectService);
    assert_eq!(state.draft.barber_id, Some(BarberId::new("jardel")));
}

#[test]
fn test_contact_prefill_lands_in_draft() {
    let state: WizardState = WizardState::new(Some(create_test_contact()));
    assert_eq!(state.draft.client_name, "Ana Souza");
    assert_eq!(state.draft.client_phone, "(11) 99999-9999");
}

// ============================================================================
// Forward guards
// ============================================================================

#[test]
fn test_continue_without_selection_is_a_no_op() {
    let state: WizardState = WizardState::new(None);
    assert!(!state.can_continue());

    let next: WizardState = apply(&state, WizardCommand::Continue).unwrap();
    assert_eq!(next, state);
}

#[test]
fn test_continue_advances_after_selection() {
    let state: WizardState = WizardState::new(None);
    let state = apply(
        &state,
        WizardCommand::SelectBarber {
            barber_id: BarberId::new("jardel"),
        },
    )
    .unwrap();
    assert!(state.can_continue());

    let next: WizardState = apply(&state, WizardCommand::Continue).unwrap();
    assert_eq!(next.step, WizardStep::SelectService);
}

#[test]
fn test_continue_requires_both_date_and_time() {
    let state: WizardState = WizardState::for_barber(BarberId::new("jardel"), None);
    let state = apply(
        &state,
        WizardCommand::SelectService {
            service_id: ServiceId::new("corte"),
        },
    )
    .unwrap();
    let state = apply(&state, WizardCommand::Continue).unwrap();
    let state = apply(
        &state,
        WizardCommand::SelectDate {
            date: date!(2024 - 06 - 03),
        },
    )
    .unwrap();

    // Date alone is not enough
    assert!(!state.can_continue());
    let held: WizardState = apply(&state, WizardCommand::Continue).unwrap();
    assert_eq!(held.step, WizardStep::SelectDateTime);
}

#[test]
fn test_continue_with_blank_contact_is_a_no_op() {
    let confirmed: WizardState = create_confirmed_state();
    let state = apply(&confirmed, WizardCommand::Back).unwrap();
    let state = apply(
        &state,
        WizardCommand::SetContact {
            name: String::from("   "),
            phone: String::from("(11) 99999-9999"),
        },
    )
    .unwrap();

    assert!(!state.can_continue());
    let next: WizardState = apply(&state, WizardCommand::Continue).unwrap();
    assert_eq!(next.step, WizardStep::EnterContact);
}

// ============================================================================
// Step-scoped commands
// ============================================================================

#[test]
fn test_select_service_outside_its_step_fails() {
    let state: WizardState = WizardState::new(None);
    let result = apply(
        &state,
        WizardCommand::SelectService {
            service_id: ServiceId::new("corte"),
        },
    );
    assert!(matches!(
        result,
        Err(CoreError::CommandNotAllowed {
            step: WizardStep::SelectBarber,
            command: "select_service",
        })
    ));
}

#[test]
fn test_select_time_before_date_fails() {
    let state: WizardState = WizardState::for_barber(BarberId::new("jardel"), None);
    let state = apply(
        &state,
        WizardCommand::SelectService {
            service_id: ServiceId::new("corte"),
        },
    )
    .unwrap();
    let state = apply(&state, WizardCommand::Continue).unwrap();

    let result = apply(
        &state,
        WizardCommand::SelectTime {
            time: TimeOfDay::from_hm(10, 0).unwrap(),
        },
    );
    assert!(matches!(result, Err(CoreError::CommandNotAllowed { .. })));
}

#[test]
fn test_changing_date_clears_chosen_time() {
    let state: WizardState = WizardState::for_barber(BarberId::new("jardel"), None);
    let state = apply(
        &state,
        WizardCommand::SelectService {
            service_id: ServiceId::new("corte"),
        },
    )
    .unwrap();
    let state = apply(&state, WizardCommand::Continue).unwrap();
    let state = apply(
        &state,
        WizardCommand::SelectDate {
            date: date!(2024 - 06 - 03),
        },
    )
    .unwrap();
    let state = apply(
        &state,
        WizardCommand::SelectTime {
            time: TimeOfDay::from_hm(10, 0).unwrap(),
        },
    )
    .unwrap();

    let state = apply(
        &state,
        WizardCommand::SelectDate {
            date: date!(2024 - 06 - 04),
        },
    )
    .unwrap();
    assert!(state.draft.time.is_none());

    // Re-picking the same date keeps the time
    let state = apply(
        &state,
        WizardCommand::SelectTime {
            time: TimeOfDay::from_hm(11, 0).unwrap(),
        },
    )
    .unwrap();
    let state = apply(
        &state,
        WizardCommand::SelectDate {
            date: date!(2024 - 06 - 04),
        },
    )
    .unwrap();
    assert!(state.draft.time.is_some());
}

// ============================================================================
// Backward transitions
// ============================================================================

#[test]
fn test_back_from_initial_step_is_a_no_op() {
    let state: WizardState = WizardState::new(None);
    let next: WizardState = apply(&state, WizardCommand::Back).unwrap();
    assert_eq!(next.step, WizardStep::SelectBarber);
}

#[test]
fn test_back_never_drops_below_preselected_barber() {
    let state: WizardState = WizardState::for_barber(BarberId::new("jardel"), None);
    let next: WizardState = apply(&state, WizardCommand::Back).unwrap();
    assert_eq!(next.step, WizardStep::SelectService);
    assert_eq!(next.draft.barber_id, Some(BarberId::new("jardel")));
}

#[test]
fn test_back_keeps_downstream_fields() {
    let confirmed: WizardState = create_confirmed_state();
    assert_eq!(confirmed.step, WizardStep::Confirm);

    let back: WizardState = apply(&confirmed, WizardCommand::Back).unwrap();
    assert_eq!(back.step, WizardStep::EnterContact);
    assert!(back.draft.time.is_some());
    assert!(back.draft.service_id.is_some());

    let back: WizardState = apply(&back, WizardCommand::Back).unwrap();
    assert_eq!(back.step, WizardStep::SelectDateTime);
    assert_eq!(back.draft.client_name, "Ana Souza");
}

// ============================================================================
// Terminal states
// ============================================================================

#[test]
fn test_abort_discards_the_draft() {
    let confirmed: WizardState = create_confirmed_state();
    let aborted: WizardState = apply(&confirmed, WizardCommand::Abort).unwrap();

    assert_eq!(aborted.step, WizardStep::Cancelled);
    assert!(aborted.draft.barber_id.is_none());
    assert!(aborted.draft.client_name.is_empty());
}

#[test]
fn test_terminal_state_rejects_all_commands() {
    let confirmed: WizardState = create_confirmed_state();
    let aborted: WizardState = apply(&confirmed, WizardCommand::Abort).unwrap();

    let result = apply(&aborted, WizardCommand::Continue);
    assert!(matches!(
        result,
        Err(CoreError::CommandNotAllowed {
            step: WizardStep::Cancelled,
            ..
        })
    ));

    let submitted: WizardState = create_confirmed_state().mark_submitted().unwrap();
    assert!(apply(&submitted, WizardCommand::Back).is_err());
}

// ============================================================================
// Submission and reset
// ============================================================================

#[test]
fn test_mark_submitted_requires_confirm() {
    let state: WizardState = WizardState::new(None);
    assert!(matches!(
        state.mark_submitted(),
        Err(CoreError::SubmitNotAllowed {
            step: WizardStep::SelectBarber,
        })
    ));

    let confirmed: WizardState = create_confirmed_state();
    assert_eq!(
        confirmed.mark_submitted().unwrap().step,
        WizardStep::Submitted
    );
}

#[test]
fn test_reset_returns_to_initial_step_and_keeps_contact() {
    let confirmed: WizardState = create_confirmed_state();
    let fresh: WizardState = confirmed.reset();

    assert_eq!(fresh.step, WizardStep::SelectBarber);
    assert!(fresh.draft.barber_id.is_none());
    assert!(fresh.draft.service_id.is_none());
    assert!(fresh.draft.date.is_none());
    assert_eq!(fresh.draft.client_name, "Ana Souza");
}

#[test]
fn test_reset_with_preselected_barber_returns_to_service_selection() {
    let state: WizardState = WizardState::for_barber(BarberId::new("jardel"), None);
    let fresh: WizardState = state.reset();

    assert_eq!(fresh.step, WizardStep::SelectService);
    assert_eq!(fresh.draft.barber_id, Some(BarberId::new("jardel")));
}
