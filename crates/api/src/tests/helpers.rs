// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::BookingDeps;
use navalha_domain::{BarberId, NewAppointment, ServiceId, TimeOfDay};
use navalha_providers::fixtures::{demo_catalog, demo_schedule};
use navalha_providers::{MemoryProfile, MemorySink, MemoryStore};
use std::sync::Arc;
use time::macros::date;

/// Wires a flow against the demo catalog and schedule with fresh
/// store/profile/sink instances. The sink is returned separately so tests
/// can assert on delivered payloads.
pub fn create_test_deps() -> (BookingDeps, Arc<MemoryStore>, Arc<MemorySink>) {
    let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    let sink: Arc<MemorySink> = Arc::new(MemorySink::new());
    let deps: BookingDeps = BookingDeps {
        catalog: Arc::new(demo_catalog()),
        schedule: Arc::new(demo_schedule()),
        store: store.clone(),
        profile: Arc::new(MemoryProfile::new()),
        confirmations: sink.clone(),
    };
    (deps, store, sink)
}

pub fn create_test_draft(time: (u8, u8)) -> NewAppointment {
    NewAppointment {
        barber_id: BarberId::new("jardel"),
        service_id: ServiceId::new("corte"),
        date: date!(2024 - 06 - 03),
        time: TimeOfDay::from_hm(time.0, time.1).unwrap(),
        client_name: String::from("Ana Souza"),
        client_phone: String::from("(11) 99999-9999"),
    }
}
