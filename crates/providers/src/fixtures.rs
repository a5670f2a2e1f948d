// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo fixture data.
//!
//! This is the catalog and schedule the server boots with and the tests
//! book against. Every value here is a literal within the validated
//! ranges, so construction cannot fail.

#![allow(clippy::unwrap_used)]

use crate::memory::{MemoryCatalog, MemorySchedule};
use navalha_domain::{
    Barber, BarberId, OpeningHours, Price, Rating, Service, ServiceId, ShopSchedule, TimeOfDay,
};

/// Returns the demo barbers.
#[must_use]
pub fn demo_barbers() -> Vec<Barber> {
    vec![
        Barber::new(
            BarberId::new("jardel"),
            String::from("Jardel"),
            Rating::from_tenths(49).unwrap(),
            Some(String::from("/images/barbeiro1.jpg")),
        ),
        Barber::new(
            BarberId::new("marcus"),
            String::from("Marcus"),
            Rating::from_tenths(48).unwrap(),
            Some(String::from("/images/barbeiro2.jpg")),
        ),
        Barber::new(
            BarberId::new("natan"),
            String::from("Natan"),
            Rating::from_tenths(47).unwrap(),
            Some(String::from("/images/barbeiro3.jpg")),
        ),
    ]
}

/// Returns the demo services.
#[must_use]
pub fn demo_services() -> Vec<Service> {
    vec![
        Service::new(
            ServiceId::new("corte"),
            String::from("Corte"),
            String::from("Corte de cabelo completo"),
            Price::from_cents(4000),
            30,
        )
        .unwrap(),
        Service::new(
            ServiceId::new("barba"),
            String::from("Barba"),
            String::from("Aparo e modelagem de barba"),
            Price::from_cents(2500),
            20,
        )
        .unwrap(),
        Service::new(
            ServiceId::new("corte-barba"),
            String::from("Corte + Barba"),
            String::from("Pacote completo com desconto especial"),
            Price::from_cents(6000),
            50,
        )
        .unwrap(),
    ]
}

/// Returns the demo catalog.
#[must_use]
pub fn demo_catalog() -> MemoryCatalog {
    MemoryCatalog::new(demo_barbers(), demo_services())
}

/// Returns the demo shop schedule: weekdays 8-19h, Saturday 8-17h.
#[must_use]
pub fn demo_schedule() -> MemorySchedule {
    let weekdays: OpeningHours = OpeningHours::new(
        TimeOfDay::from_hm(8, 0).unwrap(),
        TimeOfDay::from_hm(19, 0).unwrap(),
    )
    .unwrap();
    let saturday: OpeningHours = OpeningHours::new(
        TimeOfDay::from_hm(8, 0).unwrap(),
        TimeOfDay::from_hm(17, 0).unwrap(),
    )
    .unwrap();
    MemorySchedule::new(ShopSchedule::new(weekdays, saturday, true))
}
