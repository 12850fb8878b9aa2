// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::RequestStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The change request identifier is missing or blank.
    EmptyRequestId,
    /// The user identifier is missing or blank.
    EmptyUserId,
    /// The review action is not one of the supported actions.
    InvalidAction(String),
    /// A stored status value is not a known request status.
    InvalidStatus(String),
    /// A stored stage name is not a known review stage.
    InvalidStage(String),
    /// A stored stage outcome is not a known outcome.
    InvalidStageOutcome(String),
    /// The requested status change is not permitted.
    InvalidTransition {
        /// The status the request currently holds.
        from: RequestStatus,
        /// The status that was requested.
        to: RequestStatus,
    },
    /// A notification was requested for a status that is not terminal.
    NonTerminalNotification(RequestStatus),
    /// A review timestamp could not be formatted.
    InvalidTimestamp(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRequestId => write!(f, "Request identifier cannot be empty"),
            Self::EmptyUserId => write!(f, "User identifier cannot be empty"),
            Self::InvalidAction(action) => {
                write!(
                    f,
                    "Invalid action '{action}'. Must be 'approve' or 'reject'"
                )
            }
            Self::InvalidStatus(status) => write!(f, "Invalid request status: {status}"),
            Self::InvalidStage(stage) => write!(f, "Invalid review stage: {stage}"),
            Self::InvalidStageOutcome(outcome) => {
                write!(f, "Invalid review stage outcome: {outcome}")
            }
            Self::InvalidTransition { from, to } => {
                write!(f, "Cannot transition request from '{from}' to '{to}'")
            }
            Self::NonTerminalNotification(status) => {
                write!(
                    f,
                    "Cannot notify for status '{status}'. Must be 'approved' or 'rejected'"
                )
            }
            Self::InvalidTimestamp(msg) => write!(f, "Invalid timestamp: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
