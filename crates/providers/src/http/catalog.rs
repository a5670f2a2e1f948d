// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::wire::{BarberDto, ServiceDto};
use super::{decode, decode_optional};
use crate::contracts::CatalogProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::{Barber, BarberId, Service, ServiceId};
use reqwest::Client;
use tracing::debug;

/// A catalog backed by the booking server.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a client against the given base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    async fn list_barbers(&self) -> Result<Vec<Barber>, ProviderError> {
        debug!(base_url = %self.base_url, "Fetching barbers");
        let response = self
            .client
            .get(format!("{}/barbers", self.base_url))
            .send()
            .await?;
        let dtos: Vec<BarberDto> = decode(response).await?;
        dtos.into_iter()
            .map(|dto| Barber::try_from(dto).map_err(ProviderError::Domain))
            .collect()
    }

    async fn list_services(&self) -> Result<Vec<Service>, ProviderError> {
        debug!(base_url = %self.base_url, "Fetching services");
        let response = self
            .client
            .get(format!("{}/services", self.base_url))
            .send()
            .await?;
        let dtos: Vec<ServiceDto> = decode(response).await?;
        dtos.into_iter()
            .map(|dto| Service::try_from(dto).map_err(ProviderError::Domain))
            .collect()
    }

    async fn barber(&self, id: &BarberId) -> Result<Option<Barber>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/barbers/{}", self.base_url, id.value()))
            .send()
            .await?;
        let dto: Option<BarberDto> = decode_optional(response).await?;
        dto.map(|d| Barber::try_from(d).map_err(ProviderError::Domain))
            .transpose()
    }

    async fn service(&self, id: &ServiceId) -> Result<Option<Service>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/services/{}", self.base_url, id.value()))
            .send()
            .await?;
        let dto: Option<ServiceDto> = decode_optional(response).await?;
        dto.map(|d| Service::try_from(d).map_err(ProviderError::Domain))
            .transpose()
    }
}
