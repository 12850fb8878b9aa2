// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::helpers::{
    ADMIN_TOKEN, FailingStore, STUDENT_ID, STUDENT_TOKEN, StoreOp, StubIdentity, bearer,
    seeded_store,
};
use crate::account::{AccountDeletion, AccountService};
use crate::error::ApiError;

struct AccountHarness {
    service: AccountService<FailingStore>,
    store: Arc<Mutex<FailingStore>>,
    identity: Arc<StubIdentity>,
}

fn account_harness(store: FailingStore, identity: StubIdentity) -> AccountHarness {
    let store: Arc<Mutex<FailingStore>> = Arc::new(Mutex::new(store));
    let identity: Arc<StubIdentity> = Arc::new(identity);
    AccountHarness {
        service: AccountService::new(Arc::clone(&store), identity.clone()),
        store,
        identity,
    }
}

fn delete_body(user_id: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ "userId": user_id })).unwrap()
}

#[tokio::test]
async fn test_delete_user_removes_profile_and_account() {
    let h = account_harness(seeded_store(), StubIdentity::new());

    let outcome: AccountDeletion = h
        .service
        .delete_user(Some(&bearer(ADMIN_TOKEN)), &delete_body(STUDENT_ID))
        .await
        .unwrap();

    assert_eq!(outcome, AccountDeletion::Deleted);
    assert_eq!(outcome.message(), "ok");
    assert_eq!(h.identity.deleted_users(), vec![String::from(STUDENT_ID)]);
    assert!(
        h.store
            .lock()
            .await
            .inner
            .get_profile(STUDENT_ID)
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_profile_delete_failure_is_a_warning() {
    let mut store = seeded_store();
    store.fail_on(StoreOp::DeleteProfile);
    let h = account_harness(store, StubIdentity::new());

    let outcome: AccountDeletion = h
        .service
        .delete_user(Some(&bearer(ADMIN_TOKEN)), &delete_body(STUDENT_ID))
        .await
        .unwrap();

    assert!(matches!(outcome, AccountDeletion::DeletedWithProfileWarning(_)));
    assert!(
        outcome
            .message()
            .starts_with("Deleted auth user, but profile delete error: ")
    );
    assert_eq!(h.identity.deleted_users(), vec![String::from(STUDENT_ID)]);
}

#[tokio::test]
async fn test_identity_delete_failure_fails_the_call() {
    let h = account_harness(seeded_store(), StubIdentity::new().failing_delete());

    let result = h
        .service
        .delete_user(Some(&bearer(ADMIN_TOKEN)), &delete_body(STUDENT_ID))
        .await;

    assert!(matches!(result, Err(ApiError::AccountDeleteFailed { .. })));
}

#[tokio::test]
async fn test_delete_user_requires_admin() {
    let h = account_harness(seeded_store(), StubIdentity::new());

    let result = h
        .service
        .delete_user(Some(&bearer(STUDENT_TOKEN)), &delete_body(STUDENT_ID))
        .await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
    assert!(h.identity.deleted_users().is_empty());
    assert_eq!(h.store.lock().await.writes(), 0);
}

#[tokio::test]
async fn test_delete_user_requires_user_id() {
    let h = account_harness(seeded_store(), StubIdentity::new());

    let result = h
        .service
        .delete_user(Some(&bearer(ADMIN_TOKEN)), br"{}")
        .await;

    assert!(matches!(result, Err(ApiError::InvalidRequest { .. })));
    assert_eq!(h.identity.resolve_calls(), 0);
}
