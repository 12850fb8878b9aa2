// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API layer.
//!
//! Bodies arrive as raw bytes and are parsed here, so malformed JSON and
//! wrongly typed fields surface as `ApiError::InvalidRequest`.

use campus_review_domain::{
    RequestStatus, ReviewAction, validate_notification_status, validate_request_id,
    validate_user_id,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::ApiError;

/// Raw body of an apply-profile-change call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyProfileChangeBody {
    /// Identifier of the change request.
    pub request_id: String,
    /// `"approve"` or `"reject"`.
    pub action: String,
    /// Optional reviewer note.
    #[serde(default)]
    pub note: Option<String>,
}

/// A validated apply-profile-change call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyProfileChange {
    /// Identifier of the change request, exactly as supplied.
    pub request_id: String,
    /// The review action.
    pub action: ReviewAction,
    /// Reviewer note as supplied.
    pub note: Option<String>,
}

impl ApplyProfileChange {
    /// Parses and validates a raw body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if the body is not JSON, a field has
    /// the wrong type, the request id is blank, or the action is unknown.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let raw: ApplyProfileChangeBody = parse_json(body)?;

        validate_request_id(&raw.request_id)
            .map_err(|e| ApiError::invalid_request(e.to_string()))?;
        let action: ReviewAction = raw
            .action
            .parse::<ReviewAction>()
            .map_err(|e| ApiError::invalid_request(e.to_string()))?;

        Ok(Self {
            request_id: raw.request_id,
            action,
            note: raw.note,
        })
    }
}

/// Raw body of a notify-student call.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyStudentBody {
    /// Recipient address.
    #[serde(default)]
    pub email: Option<String>,
    /// Recipient display name.
    #[serde(default)]
    pub name: Option<String>,
    /// `"approved"` or `"rejected"`.
    #[serde(default)]
    pub status: Option<String>,
}

/// A validated notify-student call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyStudent {
    /// Recipient address.
    pub email: String,
    /// Recipient display name; empty names are dropped.
    pub name: Option<String>,
    /// Terminal status being announced.
    pub status: RequestStatus,
}

impl NotifyStudent {
    /// Parses and validates a raw body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if the body is not JSON, `email` or
    /// `status` is missing, or `status` is not a terminal status.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let raw: NotifyStudentBody = parse_json(body)?;

        let email: String = raw.email.filter(|e| !e.is_empty()).ok_or_else(|| {
            ApiError::invalid_request("Missing email or status")
        })?;
        let status_text: String = raw.status.filter(|s| !s.is_empty()).ok_or_else(|| {
            ApiError::invalid_request("Missing email or status")
        })?;

        let status: RequestStatus = status_text
            .parse::<RequestStatus>()
            .map_err(|_| ApiError::invalid_request("Invalid status"))?;
        validate_notification_status(status)
            .map_err(|e| ApiError::invalid_request(e.to_string()))?;

        Ok(Self {
            email,
            name: raw.name.filter(|n| !n.is_empty()),
            status,
        })
    }
}

/// Raw body of a delete-user call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserBody {
    /// The account to delete.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl DeleteUserBody {
    /// Parses a raw body and returns the validated user id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if the body is not JSON or `userId`
    /// is missing or blank.
    pub fn parse_user_id(body: &[u8]) -> Result<String, ApiError> {
        let raw: Self = parse_json(body)?;
        let user_id: String = raw
            .user_id
            .ok_or_else(|| ApiError::invalid_request("Missing userId"))?;

        validate_user_id(&user_id).map_err(|e| ApiError::invalid_request(e.to_string()))?;
        Ok(user_id)
    }
}

/// Response listing stranded change requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrandedRequestsResponse {
    /// Identifiers of pending requests whose approval partially ran.
    pub request_ids: Vec<String>,
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::invalid_request(format!("Invalid JSON body: {e}")))
}
