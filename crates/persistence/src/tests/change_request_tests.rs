// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_review_domain::{
    ChangeRequest, RequestStatus, Resolution, ReviewAction, ReviewEvent, ReviewStage,
    StageOutcome,
};
use time::macros::datetime;

use super::{create_test_persistence, create_test_request};

fn approve_resolution() -> Resolution {
    Resolution::for_action(
        RequestStatus::Pending,
        ReviewAction::Approve,
        "admin-1",
        Some("looks good"),
        datetime!(2026-03-01 12:00 UTC),
    )
    .unwrap()
}

fn completed_event(request_id: &str, stage: ReviewStage) -> ReviewEvent {
    ReviewEvent {
        request_id: request_id.to_string(),
        stage,
        outcome: StageOutcome::Completed,
        detail: None,
        reviewer_id: String::from("admin-1"),
        recorded_at: String::from("2026-03-01T12:00:00Z"),
    }
}

#[test]
fn test_get_change_request_returns_none_when_missing() {
    let mut db = create_test_persistence();
    assert_eq!(db.get_change_request("missing").unwrap(), None);
}

#[test]
fn test_change_request_round_trips() {
    let mut db = create_test_persistence();
    let request: ChangeRequest = create_test_request("req-1", "user-1");
    db.create_change_request(&request).unwrap();

    assert_eq!(db.get_change_request("req-1").unwrap(), Some(request));
}

#[test]
fn test_major_tri_state_survives_storage() {
    let mut db = create_test_persistence();

    let mut absent: ChangeRequest = create_test_request("req-absent", "user-1");
    absent.major = None;
    let mut cleared: ChangeRequest = create_test_request("req-cleared", "user-1");
    cleared.major = Some(None);

    db.create_change_request(&absent).unwrap();
    db.create_change_request(&cleared).unwrap();

    assert_eq!(db.get_change_request("req-absent").unwrap().unwrap().major, None);
    assert_eq!(
        db.get_change_request("req-cleared").unwrap().unwrap().major,
        Some(None)
    );
}

#[test]
fn test_finalize_pending_request() {
    let mut db = create_test_persistence();
    db.create_change_request(&create_test_request("req-1", "user-1"))
        .unwrap();

    let rows: usize = db
        .finalize_change_request("req-1", &approve_resolution())
        .unwrap();
    assert_eq!(rows, 1);

    let stored: ChangeRequest = db.get_change_request("req-1").unwrap().unwrap();
    assert_eq!(stored.status, RequestStatus::Approved);
    assert_eq!(stored.reviewed_at.as_deref(), Some("2026-03-01T12:00:00Z"));
    assert_eq!(stored.reviewed_by.as_deref(), Some("admin-1"));
    assert_eq!(stored.note.as_deref(), Some("looks good"));
    assert_eq!(stored.full_name.as_deref(), Some("Ada Lovelace"));
}

#[test]
fn test_finalize_is_guarded_on_pending() {
    let mut db = create_test_persistence();
    db.create_change_request(&create_test_request("req-1", "user-1"))
        .unwrap();

    assert_eq!(
        db.finalize_change_request("req-1", &approve_resolution())
            .unwrap(),
        1
    );
    assert_eq!(
        db.finalize_change_request("req-1", &approve_resolution())
            .unwrap(),
        0
    );
}

#[test]
fn test_finalize_missing_request_affects_zero_rows() {
    let mut db = create_test_persistence();
    assert_eq!(
        db.finalize_change_request("missing", &approve_resolution())
            .unwrap(),
        0
    );
}

#[test]
fn test_stranded_listing_reports_partial_approvals() {
    let mut db = create_test_persistence();
    db.create_change_request(&create_test_request("req-partial", "user-1"))
        .unwrap();
    db.create_change_request(&create_test_request("req-untouched", "user-2"))
        .unwrap();
    db.create_change_request(&create_test_request("req-done", "user-3"))
        .unwrap();

    db.record_review_event(&completed_event("req-partial", ReviewStage::ProfileReconciled))
        .unwrap();
    db.record_review_event(&completed_event("req-partial", ReviewStage::StudentReconciled))
        .unwrap();
    db.record_review_event(&completed_event("req-done", ReviewStage::ProfileReconciled))
        .unwrap();
    db.finalize_change_request("req-done", &approve_resolution())
        .unwrap();

    assert_eq!(
        db.list_stranded_requests().unwrap(),
        vec![String::from("req-partial")]
    );
}

#[test]
fn test_failed_stages_do_not_strand_a_request() {
    let mut db = create_test_persistence();
    db.create_change_request(&create_test_request("req-1", "user-1"))
        .unwrap();

    let mut failed: ReviewEvent = completed_event("req-1", ReviewStage::ProfileReconciled);
    failed.outcome = StageOutcome::Failed;
    db.record_review_event(&failed).unwrap();

    assert!(db.list_stranded_requests().unwrap().is_empty());
}
