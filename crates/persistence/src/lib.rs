// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Campus Review.
//!
//! Stores profiles, student records, profile change requests, and the
//! review progress log in `SQLite` via Diesel.
//!
//! ## Layout
//!
//! - `backend`: connection setup, migrations, PRAGMA handling
//! - `queries`: read-only Diesel DSL queries
//! - `mutations`: single-statement writes
//!
//! The `Persistence` adapter is the only public entry point. Row types stay
//! private; callers see domain types.
//!
//! ## Testing
//!
//! Every test opens its own shared-cache in-memory database, so tests are
//! isolated without touching the filesystem.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use campus_review_domain::{
    ChangeRequest, Profile, ProfileUpdate, Resolution, ReviewEvent, StudentRecord, StudentUpdate,
};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Type alias naming the backend explicitly.
pub type SqlitePersistence = Persistence;

/// Persistence adapter for the review store.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_review_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter backed by a `SQLite` file.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not valid UTF-8 or the database cannot
    /// be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::configure_file_database(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Profiles
    // ========================================================================

    /// Retrieves the profile owned by `user_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_profile(&mut self, user_id: &str) -> Result<Option<Profile>, PersistenceError> {
        queries::profiles::get_profile(&mut self.conn, user_id)
    }

    /// Applies a partial update to an existing profile.
    ///
    /// Returns the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the update set is empty or the statement fails.
    pub fn update_profile(
        &mut self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<usize, PersistenceError> {
        mutations::profiles::update_profile(&mut self.conn, user_id, update)
    }

    /// Inserts a new profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_profile(&mut self, profile: &Profile) -> Result<(), PersistenceError> {
        mutations::profiles::insert_profile(&mut self.conn, profile)
    }

    /// Deletes the profile owned by `user_id`.
    ///
    /// Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn delete_profile(&mut self, user_id: &str) -> Result<usize, PersistenceError> {
        mutations::profiles::delete_profile(&mut self.conn, user_id)
    }

    // ========================================================================
    // Student records
    // ========================================================================

    /// Retrieves the student record owned by `user_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_student(
        &mut self,
        user_id: &str,
    ) -> Result<Option<StudentRecord>, PersistenceError> {
        queries::students::get_student(&mut self.conn, user_id)
    }

    /// Inserts or updates the student record owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the update set is empty or the statement fails.
    pub fn upsert_student(
        &mut self,
        user_id: &str,
        update: &StudentUpdate,
    ) -> Result<(), PersistenceError> {
        mutations::students::upsert_student(&mut self.conn, user_id, update)
    }

    // ========================================================================
    // Change requests
    // ========================================================================

    /// Inserts a change request.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_change_request(
        &mut self,
        request: &ChangeRequest,
    ) -> Result<(), PersistenceError> {
        mutations::change_requests::create_change_request(&mut self.conn, request)
    }

    /// Retrieves a change request by identifier, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt.
    pub fn get_change_request(
        &mut self,
        request_id: &str,
    ) -> Result<Option<ChangeRequest>, PersistenceError> {
        queries::change_requests::get_change_request(&mut self.conn, request_id)
    }

    /// Writes a resolution onto a request only if it is still pending.
    ///
    /// Returns the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn finalize_change_request(
        &mut self,
        request_id: &str,
        resolution: &Resolution,
    ) -> Result<usize, PersistenceError> {
        mutations::change_requests::finalize_change_request(&mut self.conn, request_id, resolution)
    }

    /// Lists pending requests whose approval partially ran.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_stranded_requests(&mut self) -> Result<Vec<String>, PersistenceError> {
        queries::change_requests::list_stranded_requests(&mut self.conn)
    }

    // ========================================================================
    // Review progress log
    // ========================================================================

    /// Appends an entry to the review progress log.
    ///
    /// Returns the assigned event ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record_review_event(&mut self, event: &ReviewEvent) -> Result<i64, PersistenceError> {
        mutations::review_events::record_review_event(&mut self.conn, event)
    }

    /// Lists the review progress log of a request, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_review_events(
        &mut self,
        request_id: &str,
    ) -> Result<Vec<ReviewEvent>, PersistenceError> {
        queries::review_events::list_review_events(&mut self.conn, request_id)
    }
}
