// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity provider port and its GoTrue HTTP adapter.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::IdentityConfig;
use crate::error::IdentityError;

/// Header carrying the project key on every GoTrue call.
const API_KEY_HEADER: &str = "apikey";

/// An identity resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityUser {
    /// Stable user identifier.
    pub id: String,
    /// Login email, if the provider reports one.
    #[serde(default)]
    pub email: Option<String>,
}

/// Operations the review service needs from the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves a bearer token to the identity it was issued for.
    async fn resolve_token(&self, token: &str) -> Result<IdentityUser, IdentityError>;

    /// Replaces the login email of `user_id`.
    async fn update_user_email(&self, user_id: &str, email: &str) -> Result<(), IdentityError>;

    /// Deletes the account of `user_id`.
    async fn delete_user(&self, user_id: &str) -> Result<(), IdentityError>;
}

#[derive(Serialize)]
struct EmailUpdateBody<'a> {
    email: &'a str,
}

/// `IdentityProvider` backed by a GoTrue-compatible REST API.
#[derive(Clone)]
pub struct GoTrueClient {
    client: reqwest::Client,
    config: IdentityConfig,
}

impl GoTrueClient {
    /// Creates a client for the provider described by `config`.
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, config: IdentityConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/auth/v1/{path}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn ensure_success(response: Response) -> Result<Response, IdentityError> {
        let status: StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: String = response.text().await.unwrap_or_default();
        Err(IdentityError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl IdentityProvider for GoTrueClient {
    #[instrument(skip_all)]
    async fn resolve_token(&self, token: &str) -> Result<IdentityUser, IdentityError> {
        let response: Response = self
            .client
            .get(self.endpoint("user"))
            .bearer_auth(token)
            .header(API_KEY_HEADER, &self.config.service_role_key)
            .send()
            .await?;

        let user: IdentityUser = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| IdentityError::MalformedResponse(e.to_string()))?;

        if user.id.trim().is_empty() {
            return Err(IdentityError::MalformedResponse(String::from(
                "response carries no user id",
            )));
        }

        debug!(user_id = %user.id, "Resolved bearer token");
        Ok(user)
    }

    #[instrument(skip(self, email))]
    async fn update_user_email(&self, user_id: &str, email: &str) -> Result<(), IdentityError> {
        let response: Response = self
            .client
            .put(self.endpoint(&format!("admin/users/{user_id}")))
            .bearer_auth(&self.config.service_role_key)
            .header(API_KEY_HEADER, &self.config.service_role_key)
            .json(&EmailUpdateBody { email })
            .send()
            .await?;

        Self::ensure_success(response).await?;
        debug!(user_id, "Login email updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, user_id: &str) -> Result<(), IdentityError> {
        let response: Response = self
            .client
            .delete(self.endpoint(&format!("admin/users/{user_id}")))
            .bearer_auth(&self.config.service_role_key)
            .header(API_KEY_HEADER, &self.config.service_role_key)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        debug!(user_id, "Identity account deleted");
        Ok(())
    }
}
