// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_review_domain::{StudentRecord, StudentUpdate};

use super::create_test_persistence;
use crate::PersistenceError;

#[test]
fn test_upsert_inserts_new_record() {
    let mut db = create_test_persistence();
    let update: StudentUpdate = StudentUpdate {
        student_number: Some(String::from("S-1")),
        major: Some(Some(String::from("Physics"))),
        year: Some(3),
    };
    db.upsert_student("user-1", &update).unwrap();

    let stored: StudentRecord = db.get_student("user-1").unwrap().unwrap();
    assert_eq!(stored.student_number.as_deref(), Some("S-1"));
    assert_eq!(stored.major.as_deref(), Some("Physics"));
    assert_eq!(stored.year, Some(3));
}

#[test]
fn test_upsert_only_overwrites_present_fields() {
    let mut db = create_test_persistence();
    db.upsert_student(
        "user-1",
        &StudentUpdate {
            student_number: Some(String::from("S-1")),
            major: Some(Some(String::from("Physics"))),
            year: Some(3),
        },
    )
    .unwrap();

    db.upsert_student(
        "user-1",
        &StudentUpdate {
            student_number: None,
            major: None,
            year: Some(4),
        },
    )
    .unwrap();

    let stored: StudentRecord = db.get_student("user-1").unwrap().unwrap();
    assert_eq!(stored.student_number.as_deref(), Some("S-1"));
    assert_eq!(stored.major.as_deref(), Some("Physics"));
    assert_eq!(stored.year, Some(4));
}

#[test]
fn test_upsert_explicit_null_clears_major() {
    let mut db = create_test_persistence();
    db.upsert_student(
        "user-1",
        &StudentUpdate {
            student_number: Some(String::from("S-1")),
            major: Some(Some(String::from("Physics"))),
            year: None,
        },
    )
    .unwrap();

    db.upsert_student(
        "user-1",
        &StudentUpdate {
            student_number: None,
            major: Some(None),
            year: None,
        },
    )
    .unwrap();

    let stored: StudentRecord = db.get_student("user-1").unwrap().unwrap();
    assert_eq!(stored.major, None);
    assert_eq!(stored.student_number.as_deref(), Some("S-1"));
}

#[test]
fn test_upsert_rejects_empty_update() {
    let mut db = create_test_persistence();
    let result = db.upsert_student("user-1", &StudentUpdate::default());

    assert_eq!(
        result,
        Err(PersistenceError::EmptyUpdate(String::from("students")))
    );
    assert_eq!(db.get_student("user-1").unwrap(), None);
}
