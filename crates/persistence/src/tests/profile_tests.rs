// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_review_domain::{Profile, ProfileUpdate};

use super::{create_test_persistence, create_test_profile};
use crate::PersistenceError;

#[test]
fn test_get_profile_returns_none_when_missing() {
    let mut db = create_test_persistence();
    assert_eq!(db.get_profile("nobody").unwrap(), None);
}

#[test]
fn test_insert_and_get_profile() {
    let mut db = create_test_persistence();
    let profile: Profile = create_test_profile("user-1", "student");
    db.insert_profile(&profile).unwrap();

    assert_eq!(db.get_profile("user-1").unwrap(), Some(profile));
}

#[test]
fn test_insert_duplicate_profile_fails() {
    let mut db = create_test_persistence();
    let profile: Profile = create_test_profile("user-1", "student");
    db.insert_profile(&profile).unwrap();

    assert!(db.insert_profile(&profile).is_err());
}

#[test]
fn test_update_profile_touches_only_present_fields() {
    let mut db = create_test_persistence();
    db.insert_profile(&create_test_profile("user-1", "student"))
        .unwrap();

    let update: ProfileUpdate = ProfileUpdate {
        full_name: Some(String::from("Grace Hopper")),
        email: None,
    };
    let rows: usize = db.update_profile("user-1", &update).unwrap();
    assert_eq!(rows, 1);

    let stored: Profile = db.get_profile("user-1").unwrap().unwrap();
    assert_eq!(stored.full_name.as_deref(), Some("Grace Hopper"));
    assert_eq!(stored.email.as_deref(), Some("user-1@campus.test"));
    assert_eq!(stored.role, "student");
    assert_eq!(stored.status, "active");
}

#[test]
fn test_update_missing_profile_affects_zero_rows() {
    let mut db = create_test_persistence();
    let update: ProfileUpdate = ProfileUpdate {
        full_name: Some(String::from("Nobody")),
        email: None,
    };

    assert_eq!(db.update_profile("ghost", &update).unwrap(), 0);
}

#[test]
fn test_update_profile_rejects_empty_update() {
    let mut db = create_test_persistence();
    let result = db.update_profile("user-1", &ProfileUpdate::default());

    assert_eq!(
        result,
        Err(PersistenceError::EmptyUpdate(String::from("profiles")))
    );
}

#[test]
fn test_delete_profile() {
    let mut db = create_test_persistence();
    db.insert_profile(&create_test_profile("user-1", "student"))
        .unwrap();

    assert_eq!(db.delete_profile("user-1").unwrap(), 1);
    assert_eq!(db.get_profile("user-1").unwrap(), None);
    assert_eq!(db.delete_profile("user-1").unwrap(), 0);
}
