// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_review_domain::ReviewEvent;
use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::ReviewEventRow;
use crate::diesel_schema::review_events;
use crate::error::PersistenceError;

/// Lists the review events recorded for a request, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored stage is unknown.
pub fn list_review_events(
    conn: &mut SqliteConnection,
    request_id: &str,
) -> Result<Vec<ReviewEvent>, PersistenceError> {
    let rows: Vec<ReviewEventRow> = review_events::table
        .filter(review_events::request_id.eq(request_id))
        .order(review_events::event_id.asc())
        .select(ReviewEventRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| ReviewEvent::try_from(row).map_err(PersistenceError::from))
        .collect()
}
