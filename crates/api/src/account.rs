// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account deletion.
//!
//! The profile row is removed first on a best-effort basis. Deleting the
//! identity-provider account is the authoritative step: only its failure
//! fails the call.

use std::sync::Arc;

use campus_review_persistence::PersistenceError;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::auth::{AdministratorCaller, AuthorizationService};
use crate::error::ApiError;
use crate::identity::IdentityProvider;
use crate::request_response::DeleteUserBody;
use crate::store::ReviewStore;

/// Outcome of a successful account deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountDeletion {
    /// Both the profile and the identity account are gone.
    Deleted,
    /// The identity account is gone but the profile delete failed.
    DeletedWithProfileWarning(String),
}

impl AccountDeletion {
    /// Response body reported to the caller.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Deleted => String::from("ok"),
            Self::DeletedWithProfileWarning(reason) => {
                format!("Deleted auth user, but profile delete error: {reason}")
            }
        }
    }
}

/// Deletes user accounts on behalf of administrators.
pub struct AccountService<S> {
    store: Arc<Mutex<S>>,
    identity: Arc<dyn IdentityProvider>,
}

impl<S: ReviewStore> AccountService<S> {
    /// Creates an account service sharing the review service's store.
    #[must_use]
    pub fn new(store: Arc<Mutex<S>>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }

    /// Deletes the account named in `body`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` for a malformed body, an
    /// authentication or authorization failure, or
    /// `ApiError::AccountDeleteFailed` if the identity account could not be
    /// deleted.
    pub async fn delete_user(
        &self,
        authorization: Option<&str>,
        body: &[u8],
    ) -> Result<AccountDeletion, ApiError> {
        let user_id: String = DeleteUserBody::parse_user_id(body)?;
        let caller: AdministratorCaller = AuthorizationService::require_admin(
            &self.store,
            self.identity.as_ref(),
            authorization,
        )
        .await?;

        let profile_result: Result<usize, PersistenceError> =
            self.store.lock().await.delete_profile(&user_id);
        let profile_error: Option<String> = match profile_result {
            Ok(rows) => {
                info!(%user_id, rows, "Profile removed ahead of account deletion");
                None
            }
            Err(e) => {
                warn!(
                    %user_id,
                    error = %e,
                    "Profile delete failed; continuing with account deletion"
                );
                Some(e.to_string())
            }
        };

        self.identity.delete_user(&user_id).await.map_err(|e| {
            error!(%user_id, error = %e, "Identity account deletion failed");
            ApiError::AccountDeleteFailed {
                reason: e.to_string(),
            }
        })?;

        info!(%user_id, deleted_by = %caller.id, "Account deleted");
        Ok(profile_error.map_or(
            AccountDeletion::Deleted,
            AccountDeletion::DeletedWithProfileWarning,
        ))
    }
}
