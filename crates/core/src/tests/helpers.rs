// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{WizardCommand, WizardState, apply};
use navalha_domain::{BarberId, ClientContact, ServiceId, TimeOfDay};
use time::macros::date;

pub fn create_test_contact() -> ClientContact {
    ClientContact::new(
        String::from("Ana Souza"),
        String::from("(11) 99999-9999"),
    )
}

/// Drives a fresh wizard through every step up to `Confirm`.
pub fn create_confirmed_state() -> WizardState {
    let state: WizardState = WizardState::new(None);
    let state = apply(
        &state,
        WizardCommand::SelectBarber {
            barber_id: BarberId::new("jardel"),
        },
    )
    .unwrap();
    let state = apply(&state, WizardCommand::Continue).unwrap();
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
    let state = apply(&state, WizardCommand::Continue).unwrap();
    let state = apply(
        &state,
        WizardCommand::SetContact {
            name: String::from("Ana Souza"),
            phone: String::from("(11) 99999-9999"),
        },
    )
    .unwrap();
    apply(&state, WizardCommand::Continue).unwrap()
}
