// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod appointment;
mod availability;
mod error;
mod role;
mod schedule;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use appointment::{Appointment, NewAppointment};
pub use availability::{Slot, assemble_slots, candidate_times};
pub use error::DomainError;
pub use role::Role;
pub use schedule::{OpeningHours, ShopSchedule, SlotGranularity};
pub use status::AppointmentStatus;

// Re-export public types
pub use types::{
    AppointmentId, Barber, BarberId, ClientContact, ConfirmationPayload, Price, Rating, Service,
    ServiceId, ServiceRating, TimeOfDay, parse_date,
};
pub use validation::{validate_new_appointment, validate_slot_free};
