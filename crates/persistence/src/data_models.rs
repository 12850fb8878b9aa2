// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row and changeset types.
//!
//! Rows convert into domain types at the query boundary. Nothing outside
//! this crate sees them.

use campus_review_domain::{
    ChangeRequest, DomainError, Profile, RequestStatus, ReviewEvent, ReviewStage, StageOutcome,
    StudentRecord,
};
use diesel::prelude::*;

use crate::diesel_schema::{profile_change_requests, profiles, review_events, students};

/// Diesel Queryable struct for profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = profiles)]
pub struct ProfileRow {
    pub user_id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: String,
    pub status: String,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            user_id: row.user_id,
            full_name: row.full_name,
            email: row.email,
            role: row.role,
            status: row.status,
        }
    }
}

/// Partial profile update. `None` fields are left untouched.
#[derive(AsChangeset)]
#[diesel(table_name = profiles)]
pub struct ProfileChangeset<'a> {
    pub full_name: Option<&'a str>,
    pub email: Option<&'a str>,
}

/// Diesel Queryable struct for student rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = students)]
pub struct StudentRow {
    pub user_id: String,
    pub student_number: Option<String>,
    pub major: Option<String>,
    pub year: Option<i32>,
}

impl From<StudentRow> for StudentRecord {
    fn from(row: StudentRow) -> Self {
        Self {
            user_id: row.user_id,
            student_number: row.student_number,
            major: row.major,
            year: row.year,
        }
    }
}

/// Partial student update used on the conflict branch of an upsert.
///
/// `major: Some(None)` writes NULL; `None` leaves the column alone.
#[derive(AsChangeset)]
#[diesel(table_name = students)]
pub struct StudentChangeset<'a> {
    pub student_number: Option<&'a str>,
    pub major: Option<Option<&'a str>>,
    pub year: Option<i32>,
}

/// Diesel Queryable struct for change request rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = profile_change_requests)]
pub struct ChangeRequestRow {
    pub id: String,
    pub user_id: String,
    pub full_name: Option<String>,
    pub student_number: Option<String>,
    pub major: Option<String>,
    pub major_specified: i32,
    pub year: Option<i32>,
    pub email: Option<String>,
    pub status: String,
    pub reviewed_at: Option<String>,
    pub reviewed_by: Option<String>,
    pub note: Option<String>,
}

impl TryFrom<ChangeRequestRow> for ChangeRequest {
    type Error = DomainError;

    fn try_from(row: ChangeRequestRow) -> Result<Self, Self::Error> {
        let status: RequestStatus = row.status.parse()?;
        let major: Option<Option<String>> = if row.major_specified == 0 {
            None
        } else {
            Some(row.major)
        };

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            full_name: row.full_name,
            student_number: row.student_number,
            major,
            year: row.year,
            email: row.email,
            status,
            reviewed_at: row.reviewed_at,
            reviewed_by: row.reviewed_by,
            note: row.note,
        })
    }
}

/// Diesel Queryable struct for review event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = review_events)]
pub struct ReviewEventRow {
    pub request_id: String,
    pub stage: String,
    pub outcome: String,
    pub detail: Option<String>,
    pub reviewer_id: String,
    pub recorded_at: String,
}

impl TryFrom<ReviewEventRow> for ReviewEvent {
    type Error = DomainError;

    fn try_from(row: ReviewEventRow) -> Result<Self, Self::Error> {
        let stage: ReviewStage = row.stage.parse()?;
        let outcome: StageOutcome = row.outcome.parse()?;

        Ok(Self {
            request_id: row.request_id,
            stage,
            outcome,
            detail: row.detail,
            reviewer_id: row.reviewer_id,
            recorded_at: row.recorded_at,
        })
    }
}
