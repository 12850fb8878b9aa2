// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_review_domain::StudentRecord;
use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::StudentRow;
use crate::diesel_schema::students;
use crate::error::PersistenceError;

/// Retrieves the student record owned by `user_id`, if any.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_student(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Option<StudentRecord>, PersistenceError> {
    let row: Option<StudentRow> = students::table
        .filter(students::user_id.eq(user_id))
        .select(StudentRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(StudentRecord::from))
}
