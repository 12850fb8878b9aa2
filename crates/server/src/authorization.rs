// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization header extraction.
//!
//! The header is only captured here. Resolving and checking the credential
//! happens inside the API layer, after the request body has been validated.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

/// The raw `Authorization` header value, if present and visible ASCII.
///
/// A header holding other bytes is treated as absent, which later
/// surfaces as a missing credential.
pub struct AuthorizationHeader(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for AuthorizationHeader {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value: Option<String> = parts.headers.get(AUTHORIZATION).and_then(|header| {
            header.to_str().map(str::to_string).map_or_else(
                |_| {
                    warn!("Authorization header contains non-visible-ASCII bytes");
                    None
                },
                Some,
            )
        });

        Ok(Self(value))
    }
}
