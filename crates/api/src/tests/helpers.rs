// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test doubles and fixtures shared by the API tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use campus_review_domain::{
    ChangeRequest, Profile, ProfileDefaults, ProfileUpdate, RequestStatus, Resolution,
    ReviewAction, ReviewEvent, StudentUpdate,
};
use campus_review_persistence::{Persistence, PersistenceError};
use serde_json::json;
use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::error::IdentityError;
use crate::identity::{IdentityProvider, IdentityUser};
use crate::review::ReviewService;
use crate::store::ReviewStore;

pub const ADMIN_ID: &str = "admin-1";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const STUDENT_ID: &str = "student-1";
pub const STUDENT_TOKEN: &str = "student-token";
pub const ORPHAN_ID: &str = "orphan-1";
pub const ORPHAN_TOKEN: &str = "orphan-token";

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// In-memory identity provider with scripted failures.
#[derive(Default)]
pub struct StubIdentity {
    users: HashMap<String, IdentityUser>,
    fail_email_update: bool,
    fail_delete: bool,
    resolve_calls: AtomicUsize,
    email_updates: std::sync::Mutex<Vec<(String, String)>>,
    deleted_users: std::sync::Mutex<Vec<String>>,
}

impl StubIdentity {
    pub fn new() -> Self {
        let mut stub: Self = Self::default();
        stub.add_user(ADMIN_TOKEN, ADMIN_ID);
        stub.add_user(STUDENT_TOKEN, STUDENT_ID);
        stub.add_user(ORPHAN_TOKEN, ORPHAN_ID);
        stub
    }

    pub fn add_user(&mut self, token: &str, user_id: &str) {
        self.users.insert(
            token.to_string(),
            IdentityUser {
                id: user_id.to_string(),
                email: Some(format!("{user_id}@campus.test")),
            },
        );
    }

    pub fn failing_email_update(mut self) -> Self {
        self.fail_email_update = true;
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn email_updates(&self) -> Vec<(String, String)> {
        self.email_updates.lock().unwrap().clone()
    }

    pub fn deleted_users(&self) -> Vec<String> {
        self.deleted_users.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn resolve_token(&self, token: &str) -> Result<IdentityUser, IdentityError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.users.get(token).cloned().ok_or(IdentityError::Status {
            status: 401,
            body: String::from("invalid JWT"),
        })
    }

    async fn update_user_email(&self, user_id: &str, email: &str) -> Result<(), IdentityError> {
        if self.fail_email_update {
            return Err(IdentityError::Status {
                status: 429,
                body: String::from("email rate limit exceeded"),
            });
        }
        self.email_updates
            .lock()
            .unwrap()
            .push((user_id.to_string(), email.to_string()));
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), IdentityError> {
        if self.fail_delete {
            return Err(IdentityError::Transport(String::from("connection reset")));
        }
        self.deleted_users.lock().unwrap().push(user_id.to_string());
        Ok(())
    }
}

/// Store operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    GetProfile,
    UpdateProfile,
    InsertProfile,
    DeleteProfile,
    UpsertStudent,
    GetChangeRequest,
    Finalize,
    RecordEvent,
    ListStranded,
}

/// `ReviewStore` wrapper that injects failures and counts writes.
pub struct FailingStore {
    pub inner: Persistence,
    failing: HashSet<StoreOp>,
    writes: usize,
    finalize_concurrently: bool,
}

impl FailingStore {
    pub fn new(inner: Persistence) -> Self {
        Self {
            inner,
            failing: HashSet::new(),
            writes: 0,
            finalize_concurrently: false,
        }
    }

    pub fn fail_on(&mut self, op: StoreOp) {
        self.failing.insert(op);
    }

    /// Makes another reviewer reject the request right before our finalize.
    pub fn finalize_concurrently(&mut self) {
        self.finalize_concurrently = true;
    }

    /// Profile, student, and change request writes attempted so far.
    pub const fn writes(&self) -> usize {
        self.writes
    }

    fn check(&self, op: StoreOp) -> Result<(), PersistenceError> {
        if self.failing.contains(&op) {
            return Err(PersistenceError::DatabaseError(format!(
                "injected failure in {op:?}"
            )));
        }
        Ok(())
    }
}

impl ReviewStore for FailingStore {
    fn get_profile(&mut self, user_id: &str) -> Result<Option<Profile>, PersistenceError> {
        self.check(StoreOp::GetProfile)?;
        self.inner.get_profile(user_id)
    }

    fn update_profile(
        &mut self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<usize, PersistenceError> {
        self.writes += 1;
        self.check(StoreOp::UpdateProfile)?;
        self.inner.update_profile(user_id, update)
    }

    fn insert_profile(&mut self, profile: &Profile) -> Result<(), PersistenceError> {
        self.writes += 1;
        self.check(StoreOp::InsertProfile)?;
        self.inner.insert_profile(profile)
    }

    fn delete_profile(&mut self, user_id: &str) -> Result<usize, PersistenceError> {
        self.writes += 1;
        self.check(StoreOp::DeleteProfile)?;
        self.inner.delete_profile(user_id)
    }

    fn upsert_student(
        &mut self,
        user_id: &str,
        update: &StudentUpdate,
    ) -> Result<(), PersistenceError> {
        self.writes += 1;
        self.check(StoreOp::UpsertStudent)?;
        self.inner.upsert_student(user_id, update)
    }

    fn get_change_request(
        &mut self,
        request_id: &str,
    ) -> Result<Option<ChangeRequest>, PersistenceError> {
        self.check(StoreOp::GetChangeRequest)?;
        self.inner.get_change_request(request_id)
    }

    fn finalize_change_request(
        &mut self,
        request_id: &str,
        resolution: &Resolution,
    ) -> Result<usize, PersistenceError> {
        self.writes += 1;
        self.check(StoreOp::Finalize)?;
        if self.finalize_concurrently {
            let competing: Resolution = Resolution::for_action(
                RequestStatus::Pending,
                ReviewAction::Reject,
                "admin-2",
                None,
                OffsetDateTime::now_utc(),
            )
            .unwrap();
            self.inner.finalize_change_request(request_id, &competing)?;
        }
        self.inner.finalize_change_request(request_id, resolution)
    }

    fn record_review_event(&mut self, event: &ReviewEvent) -> Result<i64, PersistenceError> {
        self.check(StoreOp::RecordEvent)?;
        self.inner.record_review_event(event)
    }

    fn list_stranded_requests(&mut self) -> Result<Vec<String>, PersistenceError> {
        self.check(StoreOp::ListStranded)?;
        self.inner.list_stranded_requests()
    }
}

fn profile(user_id: &str, role: &str, full_name: &str) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        full_name: Some(full_name.to_string()),
        email: Some(format!("{user_id}@campus.test")),
        role: role.to_string(),
        status: String::from("active"),
    }
}

/// A store holding an admin profile and a student profile.
pub fn seeded_store() -> FailingStore {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .insert_profile(&profile(ADMIN_ID, "admin", "Ada Admin"))
        .unwrap();
    persistence
        .insert_profile(&profile(STUDENT_ID, "student", "Sam Student"))
        .unwrap();
    FailingStore::new(persistence)
}

pub struct Harness {
    pub service: ReviewService<FailingStore>,
    pub store: Arc<Mutex<FailingStore>>,
    pub identity: Arc<StubIdentity>,
}

pub fn harness_with(store: FailingStore, identity: StubIdentity) -> Harness {
    let store: Arc<Mutex<FailingStore>> = Arc::new(Mutex::new(store));
    let identity: Arc<StubIdentity> = Arc::new(identity);
    let service: ReviewService<FailingStore> = ReviewService::new(
        Arc::clone(&store),
        identity.clone(),
        ProfileDefaults::default(),
    );
    Harness {
        service,
        store,
        identity,
    }
}

pub fn harness() -> Harness {
    harness_with(seeded_store(), StubIdentity::new())
}

pub fn apply_body(request_id: &str, action: &str, note: Option<&str>) -> Vec<u8> {
    let body: serde_json::Value = match note {
        Some(note) => json!({ "requestId": request_id, "action": action, "note": note }),
        None => json!({ "requestId": request_id, "action": action }),
    };
    serde_json::to_vec(&body).unwrap()
}

/// Scenario B's request: every field present.
pub fn full_request(id: &str, user_id: &str) -> ChangeRequest {
    let mut request: ChangeRequest = ChangeRequest::new(id.to_string(), user_id.to_string());
    request.full_name = Some(String::from("Ana Cruz"));
    request.student_number = Some(String::from("2021-001"));
    request.major = Some(Some(String::from("CS")));
    request.year = Some(3);
    request.email = Some(String::from("ana@x.edu"));
    request
}
