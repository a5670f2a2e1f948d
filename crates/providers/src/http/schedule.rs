// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::decode;
use super::wire::ScheduleDto;
use crate::contracts::ScheduleProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::{OpeningHours, ShopSchedule, TimeOfDay};
use reqwest::Client;
use std::str::FromStr;

/// A schedule provider backed by the booking server.
#[derive(Debug, Clone)]
pub struct HttpSchedule {
    client: Client,
    base_url: String,
}

impl HttpSchedule {
    /// Creates a client against the given base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

fn parse_hours(open: &str, close: &str) -> Result<OpeningHours, ProviderError> {
    let open: TimeOfDay = TimeOfDay::from_str(open).map_err(ProviderError::Domain)?;
    let close: TimeOfDay = TimeOfDay::from_str(close).map_err(ProviderError::Domain)?;
    OpeningHours::new(open, close).map_err(ProviderError::Domain)
}

#[async_trait]
impl ScheduleProvider for HttpSchedule {
    async fn shop_schedule(&self) -> Result<ShopSchedule, ProviderError> {
        let response = self
            .client
            .get(format!("{}/schedule", self.base_url))
            .send()
            .await?;
        let dto: ScheduleDto = decode(response).await?;

        let weekdays: OpeningHours = parse_hours(&dto.weekday_open, &dto.weekday_close)?;
        let saturday: OpeningHours = parse_hours(&dto.saturday_open, &dto.saturday_close)?;
        Ok(ShopSchedule::new(weekdays, saturday, dto.is_open))
    }
}
