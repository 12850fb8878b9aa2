// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The profile change review pipeline.
//!
//! An invocation runs these stages in order and stops at the first failure:
//!
//! 1. validate the body
//! 2. authenticate the caller
//! 3. authorize the caller as an administrator
//! 4. load the request and require it to be pending
//! 5. route on the action
//! 6. reconcile the profile (approve only)
//! 7. reconcile the student record (approve only)
//! 8. sync the login email (approve only, email requested)
//! 9. finalize the request status
//!
//! Writes are not rolled back. A failure after stage 6 leaves earlier writes
//! in place and the request pending; re-running the approval is safe because
//! the profile and student writes are update-or-create.

use std::sync::Arc;

use campus_review_domain::{
    ChangeRequest, Profile, ProfileDefaults, ProfileUpdate, Resolution, ReviewAction, ReviewEvent,
    ReviewStage, StageOutcome, StudentUpdate,
};
use campus_review_persistence::PersistenceError;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::auth::{AdministratorCaller, AuthorizationService};
use crate::error::{ApiError, ProfileWriteOperation};
use crate::identity::IdentityProvider;
use crate::request_response::{ApplyProfileChange, StrandedRequestsResponse};
use crate::store::ReviewStore;

/// Whether a stage wrote anything.
enum StageResult {
    Applied,
    Skipped,
}

/// Orchestrates administrator review of profile change requests.
pub struct ReviewService<S> {
    store: Arc<Mutex<S>>,
    identity: Arc<dyn IdentityProvider>,
    defaults: ProfileDefaults,
}

impl<S: ReviewStore> ReviewService<S> {
    /// Creates a review service.
    #[must_use]
    pub fn new(
        store: Arc<Mutex<S>>,
        identity: Arc<dyn IdentityProvider>,
        defaults: ProfileDefaults,
    ) -> Self {
        Self {
            store,
            identity,
            defaults,
        }
    }

    /// Approves or rejects a change request.
    ///
    /// # Arguments
    ///
    /// * `authorization` - The raw authorization header value, if any
    /// * `body` - The raw request body
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` of the first stage that fails.
    pub async fn apply_profile_change(
        &self,
        authorization: Option<&str>,
        body: &[u8],
    ) -> Result<(), ApiError> {
        let call: ApplyProfileChange = ApplyProfileChange::parse(body)?;
        let caller: AdministratorCaller = AuthorizationService::require_admin(
            &self.store,
            self.identity.as_ref(),
            authorization,
        )
        .await?;

        let request: ChangeRequest = self.load_pending(&call.request_id).await?;
        info!(
            request_id = %request.id,
            user_id = %request.user_id,
            reviewer_id = %caller.id,
            action = %call.action,
            "Reviewing change request"
        );

        if call.action == ReviewAction::Approve {
            let result: Result<StageResult, ApiError> = self.reconcile_profile(&request).await;
            self.track(&request, &caller, ReviewStage::ProfileReconciled, result)
                .await?;

            let result: Result<StageResult, ApiError> = self.reconcile_student(&request).await;
            self.track(&request, &caller, ReviewStage::StudentReconciled, result)
                .await?;

            let result: Result<StageResult, ApiError> = self.sync_identity_email(&request).await;
            self.track(&request, &caller, ReviewStage::IdentityEmailSynced, result)
                .await?;
        }

        let result: Result<StageResult, ApiError> = self
            .finalize(&request, call.action, call.note.as_deref(), &caller)
            .await;
        self.track(&request, &caller, ReviewStage::Finalized, result)
            .await?;

        info!(
            request_id = %request.id,
            status = %call.action.target_status(),
            "Change request finalized"
        );
        Ok(())
    }

    /// Lists pending requests whose approval partially ran.
    ///
    /// # Errors
    ///
    /// Returns an authentication or authorization failure, or
    /// `ApiError::StrandedLookupFailed` if the listing cannot be read.
    pub async fn list_stranded_requests(
        &self,
        authorization: Option<&str>,
    ) -> Result<StrandedRequestsResponse, ApiError> {
        AuthorizationService::require_admin(&self.store, self.identity.as_ref(), authorization)
            .await?;

        let request_ids: Vec<String> = self
            .store
            .lock()
            .await
            .list_stranded_requests()
            .map_err(|e| {
                error!(error = %e, "Stranded request listing failed");
                ApiError::StrandedLookupFailed {
                    reason: e.to_string(),
                }
            })?;

        Ok(StrandedRequestsResponse { request_ids })
    }

    async fn load_pending(&self, request_id: &str) -> Result<ChangeRequest, ApiError> {
        let lookup: Result<Option<ChangeRequest>, PersistenceError> =
            self.store.lock().await.get_change_request(request_id);

        let request: ChangeRequest = match lookup {
            Ok(Some(request)) => request,
            Ok(None) => {
                debug!(request_id, "Change request not found");
                return Err(ApiError::NotFound {
                    request_id: request_id.to_string(),
                });
            }
            Err(e) => {
                error!(request_id, error = %e, "Change request lookup failed");
                return Err(ApiError::NotFound {
                    request_id: request_id.to_string(),
                });
            }
        };

        if !request.is_pending() {
            warn!(request_id, status = %request.status, "Change request already handled");
            return Err(ApiError::AlreadyHandled {
                request_id: request_id.to_string(),
            });
        }

        Ok(request)
    }

    async fn reconcile_profile(&self, request: &ChangeRequest) -> Result<StageResult, ApiError> {
        let update: ProfileUpdate = ProfileUpdate::from_request(request);
        if update.is_empty() {
            debug!(request_id = %request.id, "No profile fields requested");
            return Ok(StageResult::Skipped);
        }

        let rows: usize = self
            .store
            .lock()
            .await
            .update_profile(&request.user_id, &update)
            .map_err(|e| ApiError::ProfileWriteFailed {
                operation: ProfileWriteOperation::Update,
                reason: e.to_string(),
            })?;

        if rows == 0 {
            let profile: Profile = self.defaults.new_profile(&request.user_id, &update);
            self.store
                .lock()
                .await
                .insert_profile(&profile)
                .map_err(|e| ApiError::ProfileWriteFailed {
                    operation: ProfileWriteOperation::Insert,
                    reason: e.to_string(),
                })?;
            info!(user_id = %request.user_id, "Created missing profile during approval");
        }

        Ok(StageResult::Applied)
    }

    async fn reconcile_student(&self, request: &ChangeRequest) -> Result<StageResult, ApiError> {
        let update: StudentUpdate = StudentUpdate::from_request(request);
        if update.is_empty() {
            debug!(request_id = %request.id, "No student fields requested");
            return Ok(StageResult::Skipped);
        }

        self.store
            .lock()
            .await
            .upsert_student(&request.user_id, &update)
            .map_err(|e| ApiError::StudentWriteFailed {
                reason: e.to_string(),
            })?;

        Ok(StageResult::Applied)
    }

    async fn sync_identity_email(&self, request: &ChangeRequest) -> Result<StageResult, ApiError> {
        let Some(email) = request.requested_email() else {
            return Ok(StageResult::Skipped);
        };

        self.identity
            .update_user_email(&request.user_id, email)
            .await
            .map_err(|e| ApiError::IdentitySyncFailed {
                reason: e.to_string(),
            })?;

        Ok(StageResult::Applied)
    }

    async fn finalize(
        &self,
        request: &ChangeRequest,
        action: ReviewAction,
        note: Option<&str>,
        caller: &AdministratorCaller,
    ) -> Result<StageResult, ApiError> {
        let resolution: Resolution = Resolution::for_action(
            request.status,
            action,
            &caller.id,
            note,
            OffsetDateTime::now_utc(),
        )
        .map_err(|e| ApiError::FinalizeFailed {
            reason: e.to_string(),
        })?;

        let rows: usize = self
            .store
            .lock()
            .await
            .finalize_change_request(&request.id, &resolution)
            .map_err(|e| ApiError::FinalizeFailed {
                reason: e.to_string(),
            })?;

        if rows == 0 {
            return Err(ApiError::AlreadyHandled {
                request_id: request.id.clone(),
            });
        }

        Ok(StageResult::Applied)
    }

    /// Logs a stage result and appends it to the review progress log.
    async fn track(
        &self,
        request: &ChangeRequest,
        caller: &AdministratorCaller,
        stage: ReviewStage,
        result: Result<StageResult, ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(StageResult::Skipped) => Ok(()),
            Ok(StageResult::Applied) => {
                debug!(request_id = %request.id, %stage, "Review stage completed");
                self.record(request, caller, stage, StageOutcome::Completed, None)
                    .await;
                Ok(())
            }
            Err(err) => {
                error!(
                    request_id = %request.id,
                    user_id = %request.user_id,
                    %stage,
                    code = err.code(),
                    error = %err,
                    "Review stage failed"
                );
                self.record(
                    request,
                    caller,
                    stage,
                    StageOutcome::Failed,
                    Some(err.to_string()),
                )
                .await;
                Err(err)
            }
        }
    }

    /// Best effort: a failure to record is logged and otherwise ignored.
    async fn record(
        &self,
        request: &ChangeRequest,
        caller: &AdministratorCaller,
        stage: ReviewStage,
        outcome: StageOutcome,
        detail: Option<String>,
    ) {
        let recorded_at: String = match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(timestamp) => timestamp,
            Err(e) => {
                warn!(
                    request_id = %request.id,
                    %stage,
                    error = %e,
                    "Cannot timestamp review event"
                );
                return;
            }
        };

        let event: ReviewEvent = ReviewEvent {
            request_id: request.id.clone(),
            stage,
            outcome,
            detail,
            reviewer_id: caller.id.clone(),
            recorded_at,
        };

        if let Err(e) = self.store.lock().await.record_review_event(&event) {
            warn!(request_id = %request.id, %stage, error = %e, "Failed to record review event");
        }
    }
}
