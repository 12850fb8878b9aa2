// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Every failure that reaches a caller is an `ApiError`. Each variant names
//! the stage that failed; the server maps variants onto HTTP status codes.

use thiserror::Error;

/// Which profile write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileWriteOperation {
    /// Updating an existing profile.
    Update,
    /// Creating a profile that did not exist.
    Insert,
}

impl std::fmt::Display for ProfileWriteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Update => write!(f, "update"),
            Self::Insert => write!(f, "create"),
        }
    }
}

/// API-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request body is malformed or carries invalid values.
    #[error("{reason}")]
    InvalidRequest { reason: String },

    /// No bearer credential was supplied.
    #[error("Missing authorization")]
    MissingCredential,

    /// The bearer credential could not be resolved to an identity.
    #[error("Invalid token: {reason}")]
    InvalidCredential { reason: String },

    /// The caller is authenticated but not an administrator.
    #[error("Forbidden: user '{user_id}' is not an administrator")]
    Forbidden { user_id: String },

    /// The caller's profile could not be read.
    #[error("Failed to verify admin: {reason}")]
    AuthLookupFailed { reason: String },

    /// The change request does not exist or could not be loaded.
    #[error("Request '{request_id}' not found")]
    NotFound { request_id: String },

    /// The change request is no longer pending.
    #[error("Request '{request_id}' already handled")]
    AlreadyHandled { request_id: String },

    /// Writing the profile record failed.
    #[error("Failed to {operation} profile: {reason}")]
    ProfileWriteFailed {
        operation: ProfileWriteOperation,
        reason: String,
    },

    /// Writing the student record failed.
    #[error("Failed to update student record: {reason}")]
    StudentWriteFailed { reason: String },

    /// Updating the login email at the identity provider failed.
    #[error("Failed to sync login email: {reason}")]
    IdentitySyncFailed { reason: String },

    /// Writing the terminal status onto the request failed.
    #[error("Failed to finalize request: {reason}")]
    FinalizeFailed { reason: String },

    /// Deleting the identity-provider account failed.
    #[error("Auth delete error: {reason}")]
    AccountDeleteFailed { reason: String },

    /// The stranded-request listing could not be read.
    #[error("Failed to list stranded requests: {reason}")]
    StrandedLookupFailed { reason: String },

    /// No mail API key is configured.
    #[error("Mail delivery is not configured")]
    MailNotConfigured,

    /// The mail API rejected the message or could not be reached.
    ///
    /// `status` is `0` when no response was received.
    #[error("Resend error: {status} {body}")]
    MailDeliveryFailed { status: u16, body: String },
}

impl ApiError {
    /// Stable machine-readable code naming the failed stage.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "invalid_request",
            Self::MissingCredential => "missing_credential",
            Self::InvalidCredential { .. } => "invalid_credential",
            Self::Forbidden { .. } => "forbidden",
            Self::AuthLookupFailed { .. } => "auth_lookup_failed",
            Self::NotFound { .. } => "not_found",
            Self::AlreadyHandled { .. } => "already_handled",
            Self::ProfileWriteFailed { .. } => "profile_write_failed",
            Self::StudentWriteFailed { .. } => "student_write_failed",
            Self::IdentitySyncFailed { .. } => "identity_sync_failed",
            Self::FinalizeFailed { .. } => "finalize_failed",
            Self::AccountDeleteFailed { .. } => "account_delete_failed",
            Self::StrandedLookupFailed { .. } => "stranded_lookup_failed",
            Self::MailNotConfigured => "mail_not_configured",
            Self::MailDeliveryFailed { .. } => "mail_delivery_failed",
        }
    }

    pub(crate) fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }
}

/// Errors returned by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The provider could not be reached.
    Transport(String),
    /// The provider answered with a non-success status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },
    /// The provider answered successfully but the body was unusable.
    MalformedResponse(String),
}

impl std::fmt::Display for IdentityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Identity provider unreachable: {msg}"),
            Self::Status { status, body } => {
                write!(f, "Identity provider returned {status}: {body}")
            }
            Self::MalformedResponse(msg) => write!(f, "Malformed identity response: {msg}"),
        }
    }
}

impl std::error::Error for IdentityError {}

impl From<reqwest::Error> for IdentityError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
