// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::contracts::ConfirmationSink;
use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::ConfirmationPayload;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// A confirmation sink that records every delivered payload.
///
/// Used by the tests to assert on hand-offs, and by the server as the
/// default sink (delivery beyond the log is someone else's concern).
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<ConfirmationPayload>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
        }
    }

    /// Returns every payload delivered so far.
    #[must_use]
    pub fn delivered(&self) -> Vec<ConfirmationPayload> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ConfirmationSink for MemorySink {
    async fn deliver(&self, payload: ConfirmationPayload) -> Result<(), ProviderError> {
        info!(
            barber = %payload.barber_name,
            service = %payload.service_name,
            date = %payload.date,
            time = %payload.time,
            client = %payload.client_name,
            "Booking confirmed"
        );
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload);
        Ok(())
    }
}
