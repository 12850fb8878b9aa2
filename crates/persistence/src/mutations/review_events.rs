// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_review_domain::ReviewEvent;
use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::review_events;
use crate::error::PersistenceError;

/// Appends an entry to the review progress log.
///
/// # Returns
///
/// The event ID assigned to the entry.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the request does
/// not exist.
pub fn record_review_event(
    conn: &mut SqliteConnection,
    event: &ReviewEvent,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(review_events::table)
        .values((
            review_events::request_id.eq(&event.request_id),
            review_events::stage.eq(event.stage.as_str()),
            review_events::outcome.eq(event.outcome.as_str()),
            review_events::detail.eq(event.detail.as_deref()),
            review_events::reviewer_id.eq(&event.reviewer_id),
            review_events::recorded_at.eq(&event.recorded_at),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
