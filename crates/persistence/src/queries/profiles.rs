// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_review_domain::Profile;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::ProfileRow;
use crate::diesel_schema::profiles;
use crate::error::PersistenceError;

/// Retrieves the profile owned by `user_id`.
///
/// Returns `Ok(None)` if no profile exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_profile(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Option<Profile>, PersistenceError> {
    debug!(user_id, "Looking up profile");

    let result: Result<ProfileRow, diesel::result::Error> = profiles::table
        .filter(profiles::user_id.eq(user_id))
        .select(ProfileRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Profile::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
