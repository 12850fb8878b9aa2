// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::RequestStatus;

/// Validates a change request identifier.
///
/// # Errors
///
/// Returns `DomainError::EmptyRequestId` if the identifier is empty or
/// whitespace only.
pub fn validate_request_id(request_id: &str) -> Result<(), DomainError> {
    if request_id.trim().is_empty() {
        return Err(DomainError::EmptyRequestId);
    }
    Ok(())
}

/// Validates a user identifier.
///
/// # Errors
///
/// Returns `DomainError::EmptyUserId` if the identifier is empty or
/// whitespace only.
pub fn validate_user_id(user_id: &str) -> Result<(), DomainError> {
    if user_id.trim().is_empty() {
        return Err(DomainError::EmptyUserId);
    }
    Ok(())
}

/// Validates that a status is one a student can be notified about.
///
/// Only terminal statuses produce notifications.
///
/// # Errors
///
/// Returns `DomainError::NonTerminalNotification` for `Pending`.
pub const fn validate_notification_status(status: RequestStatus) -> Result<(), DomainError> {
    if status.is_terminal() {
        Ok(())
    } else {
        Err(DomainError::NonTerminalNotification(status))
    }
}
