// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Update sets derived from a change request.
//!
//! An update set only carries the fields a request actually proposes.
//! Fields that are absent stay `None` and are never written, so applying
//! an update set cannot null out data the user did not ask to change.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::DomainError;
use crate::types::{ChangeRequest, Profile, RequestStatus, ReviewAction};

/// Fields to apply to a `Profile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New full name.
    pub full_name: Option<String>,
    /// New contact email.
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Builds the profile update set from a change request.
    ///
    /// Empty strings count as absent.
    #[must_use]
    pub fn from_request(request: &ChangeRequest) -> Self {
        Self {
            full_name: non_empty(request.full_name.as_deref()),
            email: non_empty(request.email.as_deref()),
        }
    }

    /// Returns whether there is nothing to apply.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}

/// Fields to apply to a `StudentRecord`.
///
/// `major` is tri-state: `Some(None)` writes NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdate {
    /// New student number.
    pub student_number: Option<String>,
    /// New major, or an explicit clear.
    pub major: Option<Option<String>>,
    /// New year of study.
    pub year: Option<i32>,
}

impl StudentUpdate {
    /// Builds the student update set from a change request.
    #[must_use]
    pub fn from_request(request: &ChangeRequest) -> Self {
        Self {
            student_number: non_empty(request.student_number.as_deref()),
            major: request.major.clone(),
            year: request.year,
        }
    }

    /// Returns whether there is nothing to apply.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.student_number.is_none() && self.major.is_none() && self.year.is_none()
    }
}

/// Defaults applied when a profile must be created on first write.
///
/// This is the only place new-profile defaults are defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    /// Role assigned to newly created profiles.
    pub role: String,
    /// Account status assigned to newly created profiles.
    pub status: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            role: String::from("student"),
            status: String::from("active"),
        }
    }
}

impl ProfileDefaults {
    /// Builds a new profile for `user_id` with the update set merged in.
    #[must_use]
    pub fn new_profile(&self, user_id: &str, update: &ProfileUpdate) -> Profile {
        Profile {
            user_id: user_id.to_string(),
            full_name: update.full_name.clone(),
            email: update.email.clone(),
            role: self.role.clone(),
            status: self.status.clone(),
        }
    }
}

/// The terminal write applied to a change request by a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Target status (approved or rejected).
    pub status: RequestStatus,
    /// Review time, RFC 3339 UTC.
    pub reviewed_at: String,
    /// Reviewing administrator.
    pub reviewed_by: String,
    /// Reviewer note; empty notes are stored as `None`.
    pub note: Option<String>,
}

impl Resolution {
    /// Builds the resolution for a pending request.
    ///
    /// # Errors
    ///
    /// Returns an error if `current` cannot transition to the action's
    /// target status, or if the timestamp cannot be formatted.
    pub fn for_action(
        current: RequestStatus,
        action: ReviewAction,
        reviewed_by: &str,
        note: Option<&str>,
        reviewed_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        let status: RequestStatus = current.transition_to(action.target_status())?;
        let reviewed_at: String = reviewed_at
            .format(&Rfc3339)
            .map_err(|e| DomainError::InvalidTimestamp(e.to_string()))?;

        Ok(Self {
            status,
            reviewed_at,
            reviewed_by: reviewed_by.to_string(),
            note: non_empty(note),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
