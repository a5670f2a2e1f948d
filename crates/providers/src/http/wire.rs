// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire types shared between the remote clients and the server.
//!
//! Dates and times always travel as their canonical string forms
//! (`YYYY-MM-DD`, `HH:MM`) and are parsed explicitly on the way in.

use navalha_domain::{
    Appointment, AppointmentId, AppointmentStatus, Barber, BarberId, ClientContact, DomainError,
    NewAppointment, Price, Rating, Service, ServiceId, ServiceRating, Slot, TimeOfDay, parse_date,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Machine-readable error kinds carried by [`ErrorResponse`].
pub mod kind {
    /// Unknown barber, service, or appointment.
    pub const NOT_FOUND: &str = "not_found";
    /// A required field was missing or malformed.
    pub const VALIDATION: &str = "validation";
    /// The target slot is no longer available.
    pub const CONFLICT: &str = "conflict";
    /// An illegal status transition was requested.
    pub const INVALID_STATE: &str = "invalid_state";
    /// The caller's role does not permit the action.
    pub const FORBIDDEN: &str = "forbidden";
    /// Anything the server could not attribute to the request.
    pub const INTERNAL: &str = "internal";
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error indicator.
    pub error: bool,
    /// Machine-readable error kind (see [`kind`]).
    pub kind: String,
    /// Human-readable error message.
    pub message: String,
}

/// A barber on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarberDto {
    /// The barber's identifier.
    pub id: String,
    /// The barber's display name.
    pub name: String,
    /// The barber's average rating, in tenths.
    pub rating_tenths: u8,
    /// Optional avatar image reference.
    pub avatar: Option<String>,
}

impl From<Barber> for BarberDto {
    fn from(barber: Barber) -> Self {
        Self {
            id: barber.id.value().to_string(),
            name: barber.name,
            rating_tenths: barber.rating.tenths(),
            avatar: barber.avatar,
        }
    }
}

impl TryFrom<BarberDto> for Barber {
    type Error = DomainError;

    fn try_from(dto: BarberDto) -> Result<Self, Self::Error> {
        Ok(Self::new(
            BarberId::new(&dto.id),
            dto.name,
            Rating::from_tenths(dto.rating_tenths)?,
            dto.avatar,
        ))
    }
}

/// A service on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDto {
    /// The service's identifier.
    pub id: String,
    /// The service's display name.
    pub name: String,
    /// A short description of the service.
    pub description: String,
    /// The service's price, in cents.
    pub price_cents: u32,
    /// The service's duration in minutes.
    pub duration_minutes: u32,
}

impl From<Service> for ServiceDto {
    fn from(service: Service) -> Self {
        Self {
            id: service.id.value().to_string(),
            name: service.name,
            description: service.description,
            price_cents: service.price.cents(),
            duration_minutes: service.duration_minutes,
        }
    }
}

impl TryFrom<ServiceDto> for Service {
    type Error = DomainError;

    fn try_from(dto: ServiceDto) -> Result<Self, Self::Error> {
        Self::new(
            ServiceId::new(&dto.id),
            dto.name,
            dto.description,
            Price::from_cents(dto.price_cents),
            dto.duration_minutes,
        )
    }
}

/// The shop schedule on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDto {
    /// Monday-Friday opening time (`HH:MM`).
    pub weekday_open: String,
    /// Monday-Friday closing time (`HH:MM`).
    pub weekday_close: String,
    /// Saturday opening time (`HH:MM`).
    pub saturday_open: String,
    /// Saturday closing time (`HH:MM`).
    pub saturday_close: String,
    /// Whether the shop is taking bookings.
    pub is_open: bool,
}

/// A bookable slot on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotDto {
    /// The slot's time of day (`HH:MM`).
    pub time: String,
    /// Whether the slot can currently be booked.
    pub available: bool,
}

impl From<Slot> for SlotDto {
    fn from(slot: Slot) -> Self {
        Self {
            time: slot.time.to_string(),
            available: slot.available,
        }
    }
}

/// An appointment on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentDto {
    /// The store-assigned identifier.
    pub id: i64,
    /// The booked barber's identifier.
    pub barber_id: String,
    /// The booked service's identifier.
    pub service_id: String,
    /// The appointment date (`YYYY-MM-DD`).
    pub date: String,
    /// The appointment time (`HH:MM`).
    pub time: String,
    /// The current status.
    pub status: String,
    /// The client's full name.
    pub client_name: String,
    /// The client's phone number.
    pub client_phone: String,
    /// The client's rating, if given.
    pub rating: Option<u8>,
}

impl From<Appointment> for AppointmentDto {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.value(),
            barber_id: appointment.barber_id.value().to_string(),
            service_id: appointment.service_id.value().to_string(),
            date: appointment.date.to_string(),
            time: appointment.time.to_string(),
            status: appointment.status.as_str().to_string(),
            client_name: appointment.client_name,
            client_phone: appointment.client_phone,
            rating: appointment.rating.map(|r| r.value()),
        }
    }
}

impl TryFrom<AppointmentDto> for Appointment {
    type Error = DomainError;

    fn try_from(dto: AppointmentDto) -> Result<Self, Self::Error> {
        let rating: Option<ServiceRating> = match dto.rating {
            Some(value) => Some(ServiceRating::new(value)?),
            None => None,
        };
        Ok(Self {
            id: AppointmentId::new(dto.id),
            barber_id: BarberId::new(&dto.barber_id),
            service_id: ServiceId::new(&dto.service_id),
            date: parse_date(&dto.date)?,
            time: TimeOfDay::from_str(&dto.time)?,
            status: AppointmentStatus::from_str(&dto.status)?,
            client_name: dto.client_name,
            client_phone: dto.client_phone,
            rating,
        })
    }
}

/// Request body for creating an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    /// The booked barber's identifier.
    pub barber_id: String,
    /// The booked service's identifier.
    pub service_id: String,
    /// The appointment date (`YYYY-MM-DD`).
    pub date: String,
    /// The appointment time (`HH:MM`).
    pub time: String,
    /// The client's full name.
    pub client_name: String,
    /// The client's phone number.
    pub client_phone: String,
}

impl From<NewAppointment> for CreateAppointmentRequest {
    fn from(draft: NewAppointment) -> Self {
        Self {
            barber_id: draft.barber_id.value().to_string(),
            service_id: draft.service_id.value().to_string(),
            date: draft.date.to_string(),
            time: draft.time.to_string(),
            client_name: draft.client_name,
            client_phone: draft.client_phone,
        }
    }
}

impl TryFrom<CreateAppointmentRequest> for NewAppointment {
    type Error = DomainError;

    fn try_from(request: CreateAppointmentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            barber_id: BarberId::new(&request.barber_id),
            service_id: ServiceId::new(&request.service_id),
            date: parse_date(&request.date)?,
            time: TimeOfDay::from_str(&request.time)?,
            client_name: request.client_name,
            client_phone: request.client_phone,
        })
    }
}

/// Request body for rating a completed appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateAppointmentRequest {
    /// The rating value, 1-5.
    pub rating: u8,
}

/// Contact details on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDto {
    /// The client's full name.
    pub name: String,
    /// The client's phone number.
    pub phone: String,
}

impl From<ClientContact> for ContactDto {
    fn from(contact: ClientContact) -> Self {
        Self {
            name: contact.name,
            phone: contact.phone,
        }
    }
}

impl From<ContactDto> for ClientContact {
    fn from(dto: ContactDto) -> Self {
        Self::new(dto.name, dto.phone)
    }
}
