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
#![allow(clippy::multiple_crate_versions)]

mod contracts;
mod error;
pub mod fixtures;
pub mod http;
mod memory;

#[cfg(test)]
mod tests;

pub use contracts::{
    AppointmentStore, CatalogProvider, ConfirmationSink, ScheduleProvider, UserProfile,
};
pub use error::ProviderError;
pub use memory::{MemoryCatalog, MemoryProfile, MemorySchedule, MemorySink, MemoryStore};
