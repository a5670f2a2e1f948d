// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use navalha_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during provider operations.
///
/// Domain rule violations pass through unchanged so callers can match on
/// them; everything else is a transport- or wire-level failure and is
/// treated as transient by the consuming component.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),

    /// The remote call itself failed (connection, timeout, TLS).
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered with a payload this client cannot interpret.
    #[error("Malformed response: {message}")]
    Decode {
        /// What could not be decoded.
        message: String,
    },

    /// The remote rejected the request with a machine-readable kind.
    #[error("Remote rejected request ({kind}): {message}")]
    Remote {
        /// The wire error kind (see `http::wire::kind`).
        kind: String,
        /// The remote's error message.
        message: String,
    },
}
