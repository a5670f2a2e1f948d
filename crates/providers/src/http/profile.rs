// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::decode;
use super::wire::ContactDto;
use crate::contracts::UserProfile;
use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::ClientContact;
use reqwest::Client;

/// A user profile backed by the booking server.
#[derive(Debug, Clone)]
pub struct HttpProfile {
    client: Client,
    base_url: String,
}

impl HttpProfile {
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
impl UserProfile for HttpProfile {
    async fn set_user_info(&self, contact: ClientContact) -> Result<(), ProviderError> {
        let dto: ContactDto = contact.into();
        let response = self
            .client
            .put(format!("{}/profile", self.base_url))
            .json(&dto)
            .send()
            .await?;
        decode::<ContactDto>(response).await?;
        Ok(())
    }

    async fn user_info(&self) -> Result<Option<ClientContact>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/profile", self.base_url))
            .send()
            .await?;
        let dto: Option<ContactDto> = decode(response).await?;
        Ok(dto.map(ClientContact::from))
    }
}
