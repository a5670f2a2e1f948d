// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Remote provider implementations over the booking server's REST surface.
//!
//! Error responses carry a machine-readable `kind` (see [`wire::kind`])
//! which is preserved in `ProviderError::Remote` so the boundary layer can
//! translate remote rejections back into typed errors.

mod catalog;
mod profile;
mod schedule;
mod store;
pub mod wire;

pub use catalog::HttpCatalog;
pub use profile::HttpProfile;
pub use schedule::HttpSchedule;
pub use store::HttpStore;

use crate::error::ProviderError;
use serde::de::DeserializeOwned;
use wire::ErrorResponse;

/// Decodes a successful response body, or maps an error body to
/// `ProviderError::Remote`.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ProviderError> {
    let status: reqwest::StatusCode = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(ProviderError::Remote {
            kind: body.kind,
            message: body.message,
        }),
        Err(_) => Err(ProviderError::Decode {
            message: format!("unexpected {status} response without an error body"),
        }),
    }
}

/// Like [`decode`], but maps a remote `not_found` rejection to `None`.
async fn decode_optional<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, ProviderError> {
    match decode::<T>(response).await {
        Ok(value) => Ok(Some(value)),
        Err(ProviderError::Remote { kind, .. }) if kind == wire::kind::NOT_FOUND => Ok(None),
        Err(err) => Err(err),
    }
}
