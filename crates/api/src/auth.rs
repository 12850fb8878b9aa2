// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller authentication and authorization.
//!
//! Authentication resolves a bearer token through the identity provider.
//! Authorization is decided purely by the role stored on the caller's
//! profile.

use campus_review_domain::Profile;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::error::ApiError;
use crate::identity::{IdentityProvider, IdentityUser};
use crate::store::ReviewStore;

/// Literal prefix stripped from the authorization header.
pub const BEARER_PREFIX: &str = "Bearer";

/// Caller roles, as stored on the profile record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// May review requests and manage accounts.
    Admin,
    /// Any other stored role.
    Other(String),
}

impl Role {
    /// Classifies a stored role value.
    #[must_use]
    pub fn from_stored(role: &str) -> Self {
        if role == Profile::ADMIN_ROLE {
            Self::Admin
        } else {
            Self::Other(role.to_string())
        }
    }
}

/// An authenticated caller confirmed to hold the administrator role.
///
/// Lives for one invocation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdministratorCaller {
    /// Identity-provider user id; recorded as `reviewed_by`.
    pub id: String,
}

/// Extracts the bearer token from an authorization header value.
///
/// # Errors
///
/// Returns `ApiError::MissingCredential` if the header is absent or holds
/// nothing after the prefix.
pub fn extract_bearer(authorization: Option<&str>) -> Result<&str, ApiError> {
    let header: &str = authorization.ok_or(ApiError::MissingCredential)?;
    let token: &str = header.strip_prefix(BEARER_PREFIX).unwrap_or(header).trim();

    if token.is_empty() {
        return Err(ApiError::MissingCredential);
    }
    Ok(token)
}

/// Resolves callers through the identity provider.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates the caller presenting `authorization`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingCredential` when no token is present and
    /// `ApiError::InvalidCredential` when the provider cannot resolve it.
    pub async fn authenticate(
        identity: &dyn IdentityProvider,
        authorization: Option<&str>,
    ) -> Result<IdentityUser, ApiError> {
        let token: &str = extract_bearer(authorization)?;

        identity.resolve_token(token).await.map_err(|e| {
            warn!(error = %e, "Bearer token rejected by identity provider");
            ApiError::InvalidCredential {
                reason: e.to_string(),
            }
        })
    }
}

/// Role checks against the record store.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Confirms that `user` holds the administrator role.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthLookupFailed` if the profile lookup fails and
    /// `ApiError::Forbidden` if there is no profile or its role is not admin.
    pub async fn authorize_admin<S: ReviewStore>(
        store: &Mutex<S>,
        user: IdentityUser,
    ) -> Result<AdministratorCaller, ApiError> {
        let profile: Option<Profile> = store
            .lock()
            .await
            .get_profile(&user.id)
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Caller profile lookup failed");
                ApiError::AuthLookupFailed {
                    reason: e.to_string(),
                }
            })?;

        let role: Option<Role> = profile.map(|p| Role::from_stored(&p.role));
        if role != Some(Role::Admin) {
            warn!(user_id = %user.id, ?role, "Caller is not an administrator");
            return Err(ApiError::Forbidden { user_id: user.id });
        }

        debug!(user_id = %user.id, "Administrator authorized");
        Ok(AdministratorCaller { id: user.id })
    }

    /// Authenticates the caller and confirms the administrator role.
    ///
    /// # Errors
    ///
    /// Returns the first authentication or authorization failure.
    pub async fn require_admin<S: ReviewStore>(
        store: &Mutex<S>,
        identity: &dyn IdentityProvider,
        authorization: Option<&str>,
    ) -> Result<AdministratorCaller, ApiError> {
        let user: IdentityUser =
            AuthenticationService::authenticate(identity, authorization).await?;
        Self::authorize_admin(store, user).await
    }
}
