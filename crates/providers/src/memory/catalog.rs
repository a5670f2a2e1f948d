// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::contracts::CatalogProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::{Barber, BarberId, Service, ServiceId};

/// A fixed in-memory catalog.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    /// The barbers on offer.
    barbers: Vec<Barber>,
    /// The services on offer.
    services: Vec<Service>,
}

impl MemoryCatalog {
    /// Creates a catalog from fixed lists.
    #[must_use]
    pub const fn new(barbers: Vec<Barber>, services: Vec<Service>) -> Self {
        Self { barbers, services }
    }
}

#[async_trait]
impl CatalogProvider for MemoryCatalog {
    async fn list_barbers(&self) -> Result<Vec<Barber>, ProviderError> {
        Ok(self.barbers.clone())
    }

    async fn list_services(&self) -> Result<Vec<Service>, ProviderError> {
        Ok(self.services.clone())
    }

    async fn barber(&self, id: &BarberId) -> Result<Option<Barber>, ProviderError> {
        Ok(self.barbers.iter().find(|b| b.id == *id).cloned())
    }

    async fn service(&self, id: &ServiceId) -> Result<Option<Service>, ProviderError> {
        Ok(self.services.iter().find(|s| s.id == *id).cloned())
    }
}
