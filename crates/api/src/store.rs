// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The record store seen by the review service.

use campus_review_domain::{
    ChangeRequest, Profile, ProfileUpdate, Resolution, ReviewEvent, StudentUpdate,
};
use campus_review_persistence::{Persistence, PersistenceError};

/// Store operations used by the review pipeline.
///
/// Each call is one statement. Callers hold the store lock for a single call
/// and never across an identity-provider round trip.
pub trait ReviewStore: Send {
    /// Single-row-or-none profile lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn get_profile(&mut self, user_id: &str) -> Result<Option<Profile>, PersistenceError>;

    /// Partial profile update; returns the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_profile(
        &mut self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<usize, PersistenceError>;

    /// Inserts a new profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_profile(&mut self, profile: &Profile) -> Result<(), PersistenceError>;

    /// Deletes a profile; returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_profile(&mut self, user_id: &str) -> Result<usize, PersistenceError>;

    /// Insert-or-update of the student record keyed by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn upsert_student(&mut self, user_id: &str, update: &StudentUpdate)
    -> Result<(), PersistenceError>;

    /// Single-row-or-none change request lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn get_change_request(
        &mut self,
        request_id: &str,
    ) -> Result<Option<ChangeRequest>, PersistenceError>;

    /// Guarded terminal write; returns the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn finalize_change_request(
        &mut self,
        request_id: &str,
        resolution: &Resolution,
    ) -> Result<usize, PersistenceError>;

    /// Appends to the review progress log.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn record_review_event(&mut self, event: &ReviewEvent) -> Result<i64, PersistenceError>;

    /// Pending requests with completed approve-path stages.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn list_stranded_requests(&mut self) -> Result<Vec<String>, PersistenceError>;
}

impl ReviewStore for Persistence {
    fn get_profile(&mut self, user_id: &str) -> Result<Option<Profile>, PersistenceError> {
        Self::get_profile(self, user_id)
    }

    fn update_profile(
        &mut self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<usize, PersistenceError> {
        Self::update_profile(self, user_id, update)
    }

    fn insert_profile(&mut self, profile: &Profile) -> Result<(), PersistenceError> {
        Self::insert_profile(self, profile)
    }

    fn delete_profile(&mut self, user_id: &str) -> Result<usize, PersistenceError> {
        Self::delete_profile(self, user_id)
    }

    fn upsert_student(
        &mut self,
        user_id: &str,
        update: &StudentUpdate,
    ) -> Result<(), PersistenceError> {
        Self::upsert_student(self, user_id, update)
    }

    fn get_change_request(
        &mut self,
        request_id: &str,
    ) -> Result<Option<ChangeRequest>, PersistenceError> {
        Self::get_change_request(self, request_id)
    }

    fn finalize_change_request(
        &mut self,
        request_id: &str,
        resolution: &Resolution,
    ) -> Result<usize, PersistenceError> {
        Self::finalize_change_request(self, request_id, resolution)
    }

    fn record_review_event(&mut self, event: &ReviewEvent) -> Result<i64, PersistenceError> {
        Self::record_review_event(self, event)
    }

    fn list_stranded_requests(&mut self) -> Result<Vec<String>, PersistenceError> {
        Self::list_stranded_requests(self)
    }
}
