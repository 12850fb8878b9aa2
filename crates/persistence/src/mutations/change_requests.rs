// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Change request mutations.

use campus_review_domain::{ChangeRequest, RequestStatus, Resolution};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::profile_change_requests;
use crate::error::PersistenceError;

/// Inserts a change request.
///
/// Submission is handled outside this service; this is used to seed the
/// store.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_change_request(
    conn: &mut SqliteConnection,
    request: &ChangeRequest,
) -> Result<(), PersistenceError> {
    let major: Option<&str> = request.major.as_ref().and_then(Option::as_deref);
    let major_specified: i32 = i32::from(request.major.is_some());

    diesel::insert_into(profile_change_requests::table)
        .values((
            profile_change_requests::id.eq(&request.id),
            profile_change_requests::user_id.eq(&request.user_id),
            profile_change_requests::full_name.eq(request.full_name.as_deref()),
            profile_change_requests::student_number.eq(request.student_number.as_deref()),
            profile_change_requests::major.eq(major),
            profile_change_requests::major_specified.eq(major_specified),
            profile_change_requests::year.eq(request.year),
            profile_change_requests::email.eq(request.email.as_deref()),
            profile_change_requests::status.eq(request.status.as_str()),
            profile_change_requests::reviewed_at.eq(request.reviewed_at.as_deref()),
            profile_change_requests::reviewed_by.eq(request.reviewed_by.as_deref()),
            profile_change_requests::note.eq(request.note.as_deref()),
        ))
        .execute(conn)?;

    debug!(request_id = %request.id, user_id = %request.user_id, "Change request created");
    Ok(())
}

/// Writes a review resolution onto a request that is still pending.
///
/// The status guard is part of the statement, so two reviewers racing on
/// the same request cannot both succeed.
///
/// # Returns
///
/// The number of rows affected: `0` when the request no longer exists or
/// has already left pending.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn finalize_change_request(
    conn: &mut SqliteConnection,
    request_id: &str,
    resolution: &Resolution,
) -> Result<usize, PersistenceError> {
    let rows: usize = diesel::update(
        profile_change_requests::table
            .filter(profile_change_requests::id.eq(request_id))
            .filter(profile_change_requests::status.eq(RequestStatus::Pending.as_str())),
    )
    .set((
        profile_change_requests::status.eq(resolution.status.as_str()),
        profile_change_requests::reviewed_at.eq(Some(resolution.reviewed_at.as_str())),
        profile_change_requests::reviewed_by.eq(Some(resolution.reviewed_by.as_str())),
        profile_change_requests::note.eq(resolution.note.as_deref()),
    ))
    .execute(conn)?;

    info!(
        request_id,
        status = %resolution.status,
        rows,
        "Change request finalize attempted"
    );
    Ok(rows)
}
