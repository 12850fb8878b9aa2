// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod change_request_tests;
mod profile_tests;
mod student_tests;

use campus_review_domain::{ChangeRequest, Profile};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

pub fn create_test_profile(user_id: &str, role: &str) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        full_name: Some(String::from("Ada Student")),
        email: Some(format!("{user_id}@campus.test")),
        role: role.to_string(),
        status: String::from("active"),
    }
}

pub fn create_test_request(id: &str, user_id: &str) -> ChangeRequest {
    let mut request: ChangeRequest = ChangeRequest::new(id.to_string(), user_id.to_string());
    request.full_name = Some(String::from("Ada Lovelace"));
    request.student_number = Some(String::from("S-1001"));
    request.major = Some(Some(String::from("Mathematics")));
    request.year = Some(2);
    request.email = Some(String::from("ada@campus.test"));
    request
}
