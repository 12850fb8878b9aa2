// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Review progress log vocabulary.
//!
//! Each write stage of a review records whether it completed or failed.
//! A pending request with completed approve-path stages has been partially
//! applied and needs an operator to re-run the approval.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A write stage of the review pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStage {
    /// Name and email applied to the profile record.
    ProfileReconciled,
    /// Student fields upserted into the student record.
    StudentReconciled,
    /// Login email updated at the identity provider.
    IdentityEmailSynced,
    /// Terminal status written onto the request.
    Finalized,
}

impl FromStr for ReviewStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile_reconciled" => Ok(Self::ProfileReconciled),
            "student_reconciled" => Ok(Self::StudentReconciled),
            "identity_email_synced" => Ok(Self::IdentityEmailSynced),
            "finalized" => Ok(Self::Finalized),
            _ => Err(DomainError::InvalidStage(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReviewStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ReviewStage {
    /// Converts this stage to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileReconciled => "profile_reconciled",
            Self::StudentReconciled => "student_reconciled",
            Self::IdentityEmailSynced => "identity_email_synced",
            Self::Finalized => "finalized",
        }
    }
}

/// Result of a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageOutcome {
    /// The stage's write succeeded.
    Completed,
    /// The stage's write failed and the review stopped.
    Failed,
}

impl FromStr for StageOutcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(DomainError::InvalidStageOutcome(s.to_string())),
        }
    }
}

impl std::fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StageOutcome {
    /// Converts this outcome to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// One entry in a request's review progress log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEvent {
    /// The request the stage belongs to.
    pub request_id: String,
    /// The stage that ran.
    pub stage: ReviewStage,
    /// Whether it completed.
    pub outcome: StageOutcome,
    /// Failure reason or other context.
    pub detail: Option<String>,
    /// The administrator running the review.
    pub reviewer_id: String,
    /// When the stage finished (RFC 3339).
    pub recorded_at: String,
}
