// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire type conversion tests.

use crate::http::wire::{AppointmentDto, BarberDto, CreateAppointmentRequest};
use navalha_domain::{Appointment, Barber, DomainError, NewAppointment};
use time::macros::date;

fn create_test_dto() -> AppointmentDto {
    AppointmentDto {
        id: 3,
        barber_id: String::from("jardel"),
        service_id: String::from("corte"),
        date: String::from("2024-06-03"),
        time: String::from("10:00"),
        status: String::from("scheduled"),
        client_name: String::from("Ana Souza"),
        client_phone: String::from("(11) 99999-9999"),
        rating: None,
    }
}

#[test]
fn test_appointment_dto_round_trip() {
    let appointment: Appointment = Appointment::try_from(create_test_dto()).unwrap();
    assert_eq!(appointment.id.value(), 3);
    assert_eq!(appointment.date, date!(2024 - 06 - 03));
    assert_eq!(appointment.time.to_string(), "10:00");

    let dto: AppointmentDto = appointment.into();
    assert_eq!(dto.date, "2024-06-03");
    assert_eq!(dto.status, "scheduled");
}

#[test]
fn test_appointment_dto_rejects_bad_status() {
    let mut dto: AppointmentDto = create_test_dto();
    dto.status = String::from("pending");
    assert!(matches!(
        Appointment::try_from(dto),
        Err(DomainError::InvalidAppointmentStatus { .. })
    ));
}

#[test]
fn test_appointment_dto_rejects_out_of_range_rating() {
    let mut dto: AppointmentDto = create_test_dto();
    dto.status = String::from("completed");
    dto.rating = Some(6);
    assert!(matches!(
        Appointment::try_from(dto),
        Err(DomainError::InvalidRating { value: 6 })
    ));
}

#[test]
fn test_barber_dto_rejects_out_of_range_rating() {
    let dto = BarberDto {
        id: String::from("jardel"),
        name: String::from("Jardel"),
        rating_tenths: 52,
        avatar: None,
    };
    assert!(matches!(
        Barber::try_from(dto),
        Err(DomainError::InvalidAverageRating { tenths: 52 })
    ));
}

#[test]
fn test_create_request_round_trip() {
    let dto = CreateAppointmentRequest {
        barber_id: String::from("jardel"),
        service_id: String::from("corte"),
        date: String::from("2024-06-03"),
        time: String::from("10:00"),
        client_name: String::from("Ana Souza"),
        client_phone: String::from("(11) 99999-9999"),
    };

    let draft: NewAppointment = NewAppointment::try_from(dto).unwrap();
    assert_eq!(draft.barber_id.value(), "jardel");

    let back: CreateAppointmentRequest = draft.into();
    assert_eq!(back.time, "10:00");
}
