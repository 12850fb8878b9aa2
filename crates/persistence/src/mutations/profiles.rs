// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profile mutations.

use campus_review_domain::{Profile, ProfileUpdate};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::data_models::ProfileChangeset;
use crate::diesel_schema::profiles;
use crate::error::PersistenceError;

/// Applies an update set to the profile owned by `user_id`.
///
/// Only fields present in `update` are written. `role` is never touched.
///
/// # Returns
///
/// The number of rows affected: `0` when no profile exists.
///
/// # Errors
///
/// Returns `PersistenceError::EmptyUpdate` if `update` carries no fields,
/// or an error if the statement fails.
pub fn update_profile(
    conn: &mut SqliteConnection,
    user_id: &str,
    update: &ProfileUpdate,
) -> Result<usize, PersistenceError> {
    if update.is_empty() {
        return Err(PersistenceError::EmptyUpdate(String::from("profiles")));
    }

    let changeset: ProfileChangeset<'_> = ProfileChangeset {
        full_name: update.full_name.as_deref(),
        email: update.email.as_deref(),
    };

    let rows: usize = diesel::update(profiles::table.filter(profiles::user_id.eq(user_id)))
        .set(&changeset)
        .execute(conn)?;

    debug!(user_id, rows, "Profile update applied");
    Ok(rows)
}

/// Inserts a new profile.
///
/// # Errors
///
/// Returns an error if the insert fails, including when a profile for the
/// same user already exists.
pub fn insert_profile(
    conn: &mut SqliteConnection,
    profile: &Profile,
) -> Result<(), PersistenceError> {
    diesel::insert_into(profiles::table)
        .values((
            profiles::user_id.eq(&profile.user_id),
            profiles::full_name.eq(profile.full_name.as_deref()),
            profiles::email.eq(profile.email.as_deref()),
            profiles::role.eq(&profile.role),
            profiles::status.eq(&profile.status),
        ))
        .execute(conn)?;

    info!(user_id = %profile.user_id, role = %profile.role, "Profile created");
    Ok(())
}

/// Deletes the profile owned by `user_id`.
///
/// # Returns
///
/// The number of rows removed.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn delete_profile(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<usize, PersistenceError> {
    let rows: usize =
        diesel::delete(profiles::table.filter(profiles::user_id.eq(user_id))).execute(conn)?;

    info!(user_id, rows, "Profile deleted");
    Ok(rows)
}
