// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Change request queries.

use campus_review_domain::{ChangeRequest, RequestStatus, ReviewStage, StageOutcome};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::ChangeRequestRow;
use crate::diesel_schema::{profile_change_requests, review_events};
use crate::error::PersistenceError;

/// Retrieves a change request by identifier.
///
/// Returns `Ok(None)` if the request does not exist.
///
/// # Errors
///
/// Returns an error if the query fails or the stored status is unknown.
pub fn get_change_request(
    conn: &mut SqliteConnection,
    request_id: &str,
) -> Result<Option<ChangeRequest>, PersistenceError> {
    debug!(request_id, "Looking up change request");

    let result: Result<ChangeRequestRow, diesel::result::Error> = profile_change_requests::table
        .filter(profile_change_requests::id.eq(request_id))
        .select(ChangeRequestRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(ChangeRequest::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Lists pending requests whose approval partially ran.
///
/// A request qualifies when it is still pending and has at least one
/// completed stage other than finalization. Identifiers are returned in
/// ascending order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_stranded_requests(
    conn: &mut SqliteConnection,
) -> Result<Vec<String>, PersistenceError> {
    let ids: Vec<String> = profile_change_requests::table
        .inner_join(review_events::table)
        .filter(profile_change_requests::status.eq(RequestStatus::Pending.as_str()))
        .filter(review_events::outcome.eq(StageOutcome::Completed.as_str()))
        .filter(review_events::stage.ne(ReviewStage::Finalized.as_str()))
        .select(profile_change_requests::id)
        .distinct()
        .order(profile_change_requests::id.asc())
        .load(conn)?;

    debug!(count = ids.len(), "Listed stranded change requests");
    Ok(ids)
}
