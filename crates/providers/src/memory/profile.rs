// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::contracts::UserProfile;
use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::ClientContact;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// An in-memory user profile holding the contact prefill.
#[derive(Debug, Default)]
pub struct MemoryProfile {
    contact: Mutex<Option<ClientContact>>,
}

impl MemoryProfile {
    /// Creates an empty profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contact: Mutex::new(None),
        }
    }

    /// Creates a profile with stored contact details.
    #[must_use]
    pub const fn with_contact(contact: ClientContact) -> Self {
        Self {
            contact: Mutex::new(Some(contact)),
        }
    }
}

#[async_trait]
impl UserProfile for MemoryProfile {
    async fn set_user_info(&self, contact: ClientContact) -> Result<(), ProviderError> {
        debug!(name = %contact.name, "Storing contact prefill");
        *self
            .contact
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(contact);
        Ok(())
    }

    async fn user_info(&self) -> Result<Option<ClientContact>, ProviderError> {
        Ok(self
            .contact
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
