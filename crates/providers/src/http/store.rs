// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::decode;
use super::wire::{AppointmentDto, CreateAppointmentRequest, RateAppointmentRequest};
use crate::contracts::AppointmentStore;
use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::{
    Appointment, AppointmentId, BarberId, NewAppointment, ServiceRating, TimeOfDay,
};
use reqwest::Client;
use std::str::FromStr;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};
use tracing::debug;

/// An appointment store backed by the booking server.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Creates a client against the given base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_transition(&self, id: AppointmentId, action: &str) -> Result<Appointment, ProviderError> {
        debug!(appointment_id = id.value(), action, "Posting status transition");
        let response = self
            .client
            .post(format!(
                "{}/appointments/{}/{}",
                self.base_url,
                id.value(),
                action
            ))
            .send()
            .await?;
        let dto: AppointmentDto = decode(response).await?;
        Appointment::try_from(dto).map_err(ProviderError::Domain)
    }
}

#[async_trait]
impl AppointmentStore for HttpStore {
    async fn create(&self, draft: NewAppointment) -> Result<Appointment, ProviderError> {
        let request: CreateAppointmentRequest = draft.into();
        let response = self
            .client
            .post(format!("{}/appointments", self.base_url))
            .json(&request)
            .send()
            .await?;
        let dto: AppointmentDto = decode(response).await?;
        Appointment::try_from(dto).map_err(ProviderError::Domain)
    }

    async fn cancel(&self, id: AppointmentId) -> Result<Appointment, ProviderError> {
        self.post_transition(id, "cancel").await
    }

    async fn complete(&self, id: AppointmentId) -> Result<Appointment, ProviderError> {
        self.post_transition(id, "complete").await
    }

    async fn rate(
        &self,
        id: AppointmentId,
        rating: ServiceRating,
    ) -> Result<Appointment, ProviderError> {
        let response = self
            .client
            .post(format!(
                "{}/appointments/{}/rate",
                self.base_url,
                id.value()
            ))
            .json(&RateAppointmentRequest {
                rating: rating.value(),
            })
            .send()
            .await?;
        let dto: AppointmentDto = decode(response).await?;
        Appointment::try_from(dto).map_err(ProviderError::Domain)
    }

    async fn list(&self) -> Result<Vec<Appointment>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/appointments", self.base_url))
            .send()
            .await?;
        let dtos: Vec<AppointmentDto> = decode(response).await?;
        dtos.into_iter()
            .map(|dto| Appointment::try_from(dto).map_err(ProviderError::Domain))
            .collect()
    }

    async fn next_scheduled(
        &self,
        now: PrimitiveDateTime,
    ) -> Result<Option<Appointment>, ProviderError> {
        let format = format_description!("[year]-[month]-[day]T[hour]:[minute]");
        let now: String = now.format(&format).map_err(|e| ProviderError::Decode {
            message: format!("failed to format 'now' parameter: {e}"),
        })?;
        let response = self
            .client
            .get(format!("{}/appointments/next", self.base_url))
            .query(&[("now", now.as_str())])
            .send()
            .await?;
        let dto: Option<AppointmentDto> = decode(response).await?;
        dto.map(|d| Appointment::try_from(d).map_err(ProviderError::Domain))
            .transpose()
    }

    async fn booked_times(
        &self,
        barber_id: &BarberId,
        date: Date,
    ) -> Result<Vec<TimeOfDay>, ProviderError> {
        let response = self
            .client
            .get(format!(
                "{}/barbers/{}/booked-times",
                self.base_url,
                barber_id.value()
            ))
            .query(&[("date", date.to_string().as_str())])
            .send()
            .await?;
        let times: Vec<String> = decode(response).await?;
        times
            .iter()
            .map(|t| TimeOfDay::from_str(t).map_err(ProviderError::Domain))
            .collect()
    }
}
