// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Appointment, AppointmentId, BarberId, DomainError, NewAppointment, ServiceId, TimeOfDay,
    validate_new_appointment, validate_slot_free,
};
use time::macros::date;

fn create_test_draft() -> NewAppointment {
    NewAppointment {
        barber_id: BarberId::new("jardel"),
        service_id: ServiceId::new("corte"),
        date: date!(2024 - 06 - 03),
        time: TimeOfDay::from_hm(10, 0).unwrap(),
        client_name: String::from("Ana Souza"),
        client_phone: String::from("(11) 99999-9999"),
    }
}

#[test]
fn test_valid_draft_passes() {
    assert!(validate_new_appointment(&create_test_draft()).is_ok());
}

#[test]
fn test_blank_client_name_rejected() {
    let mut draft = create_test_draft();
    draft.client_name = String::from("   ");
    assert!(matches!(
        validate_new_appointment(&draft),
        Err(DomainError::InvalidClientName(_))
    ));
}

#[test]
fn test_blank_client_phone_rejected() {
    let mut draft = create_test_draft();
    draft.client_phone = String::new();
    assert!(matches!(
        validate_new_appointment(&draft),
        Err(DomainError::InvalidClientPhone(_))
    ));
}

#[test]
fn test_blank_barber_rejected() {
    let mut draft = create_test_draft();
    draft.barber_id = BarberId::new("");
    assert!(matches!(
        validate_new_appointment(&draft),
        Err(DomainError::MissingField { field: "barber" })
    ));
}

#[test]
fn test_slot_free_with_no_appointments() {
    assert!(validate_slot_free(&create_test_draft(), &[]).is_ok());
}

#[test]
fn test_slot_taken_by_scheduled_appointment() {
    let existing = Appointment::scheduled(AppointmentId::new(1), create_test_draft());

    let result = validate_slot_free(&create_test_draft(), &[existing]);
    assert!(matches!(result, Err(DomainError::SlotUnavailable { .. })));
}

#[test]
fn test_cancelled_appointment_frees_slot() {
    let mut existing = Appointment::scheduled(AppointmentId::new(1), create_test_draft());
    existing.cancel().unwrap();

    assert!(validate_slot_free(&create_test_draft(), &[existing]).is_ok());
}

#[test]
fn test_other_barber_same_time_does_not_conflict() {
    let existing = Appointment::scheduled(AppointmentId::new(1), create_test_draft());

    let mut draft = create_test_draft();
    draft.barber_id = BarberId::new("marcus");
    assert!(validate_slot_free(&draft, &[existing]).is_ok());
}
