// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, RequestStatus};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::EmptyRequestId;
    assert_eq!(format!("{err}"), "Request identifier cannot be empty");

    let err: DomainError = DomainError::EmptyUserId;
    assert_eq!(format!("{err}"), "User identifier cannot be empty");

    let err: DomainError = DomainError::InvalidAction(String::from("archive"));
    assert_eq!(
        format!("{err}"),
        "Invalid action 'archive'. Must be 'approve' or 'reject'"
    );

    let err: DomainError = DomainError::InvalidStatus(String::from("done"));
    assert_eq!(format!("{err}"), "Invalid request status: done");

    let err: DomainError = DomainError::InvalidTransition {
        from: RequestStatus::Approved,
        to: RequestStatus::Rejected,
    };
    assert_eq!(
        format!("{err}"),
        "Cannot transition request from 'approved' to 'rejected'"
    );

    let err: DomainError = DomainError::NonTerminalNotification(RequestStatus::Pending);
    assert_eq!(
        format!("{err}"),
        "Cannot notify for status 'pending'. Must be 'approved' or 'rejected'"
    );
}
