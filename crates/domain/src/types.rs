// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a profile change request.
///
/// A request is created `Pending` and leaves that state exactly once.
/// `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting administrator review.
    #[default]
    Pending,
    /// Approved; requested changes were applied.
    Approved,
    /// Rejected; no profile data was touched.
    Rejected,
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RequestStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns whether this status can no longer change.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Approved
    /// - Pending → Rejected
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
        )
    }

    /// Validates a transition, returning the target status on success.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the transition is not permitted.
    pub fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(DomainError::InvalidTransition {
                from: *self,
                to: target,
            })
        }
    }
}

/// The disposition an administrator chooses for a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    /// Apply the requested changes and mark the request approved.
    Approve,
    /// Mark the request rejected without touching profile data.
    Reject,
}

impl FromStr for ReviewAction {
    type Err = DomainError;

    /// Parses an action. Matching is exact: `"Approve"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            _ => Err(DomainError::InvalidAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ReviewAction {
    /// Converts this action to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// The terminal status this action moves a pending request into.
    #[must_use]
    pub const fn target_status(&self) -> RequestStatus {
        match self {
            Self::Approve => RequestStatus::Approved,
            Self::Reject => RequestStatus::Rejected,
        }
    }
}

/// A user's proposal to change their profile and student fields.
///
/// Every proposed field is independently optional. `major` is tri-state:
/// `None` means the request does not touch the major, `Some(None)` clears
/// it, `Some(Some(value))` sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    /// The request identifier.
    pub id: String,
    /// The user whose records the request targets.
    pub user_id: String,
    /// Proposed full name.
    pub full_name: Option<String>,
    /// Proposed student number.
    pub student_number: Option<String>,
    /// Proposed major.
    pub major: Option<Option<String>>,
    /// Proposed year of study.
    pub year: Option<i32>,
    /// Proposed email address (also the login email).
    pub email: Option<String>,
    /// Current lifecycle state.
    pub status: RequestStatus,
    /// When the request was reviewed (RFC 3339), if it has been.
    pub reviewed_at: Option<String>,
    /// Identifier of the reviewing administrator, if reviewed.
    pub reviewed_by: Option<String>,
    /// Reviewer note, if any.
    pub note: Option<String>,
}

impl ChangeRequest {
    /// Creates a pending request with no proposed fields.
    #[must_use]
    pub const fn new(id: String, user_id: String) -> Self {
        Self {
            id,
            user_id,
            full_name: None,
            student_number: None,
            major: None,
            year: None,
            email: None,
            status: RequestStatus::Pending,
            reviewed_at: None,
            reviewed_by: None,
            note: None,
        }
    }

    /// Returns whether the request is still awaiting review.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// The requested email, if one is present and non-empty.
    #[must_use]
    pub fn requested_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// A generic profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The owning user.
    pub user_id: String,
    /// Display name.
    pub full_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Role, fixed at creation.
    pub role: String,
    /// Account status.
    pub status: String,
}

impl Profile {
    /// Role value held by administrators.
    pub const ADMIN_ROLE: &'static str = "admin";

    /// Returns whether this profile holds the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Self::ADMIN_ROLE
    }
}

/// A role-specific student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// The owning user.
    pub user_id: String,
    /// Institutional student number.
    pub student_number: Option<String>,
    /// Declared major.
    pub major: Option<String>,
    /// Year of study.
    pub year: Option<i32>,
}
