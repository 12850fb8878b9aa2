// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_review_domain::StudentUpdate;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::StudentChangeset;
use crate::diesel_schema::students;
use crate::error::PersistenceError;

/// Inserts or updates the student record for `user_id`.
///
/// On insert, fields absent from `update` start as NULL. On conflict only
/// the fields present in `update` are overwritten.
///
/// # Errors
///
/// Returns `PersistenceError::EmptyUpdate` if `update` carries no fields,
/// or an error if the statement fails.
pub fn upsert_student(
    conn: &mut SqliteConnection,
    user_id: &str,
    update: &StudentUpdate,
) -> Result<(), PersistenceError> {
    if update.is_empty() {
        return Err(PersistenceError::EmptyUpdate(String::from("students")));
    }

    let major: Option<Option<&str>> = update.major.as_ref().map(Option::as_deref);
    let changeset: StudentChangeset<'_> = StudentChangeset {
        student_number: update.student_number.as_deref(),
        major,
        year: update.year,
    };

    diesel::insert_into(students::table)
        .values((
            students::user_id.eq(user_id),
            students::student_number.eq(update.student_number.as_deref()),
            students::major.eq(major.flatten()),
            students::year.eq(update.year),
        ))
        .on_conflict(students::user_id)
        .do_update()
        .set(&changeset)
        .execute(conn)?;

    debug!(user_id, "Student record upserted");
    Ok(())
}
