// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod changes;
mod error;
mod review_log;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use changes::{ProfileDefaults, ProfileUpdate, Resolution, StudentUpdate};
pub use error::DomainError;
pub use review_log::{ReviewEvent, ReviewStage, StageOutcome};
pub use types::{ChangeRequest, Profile, RequestStatus, ReviewAction, StudentRecord};
pub use validation::{validate_notification_status, validate_request_id, validate_user_id};
