// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API layer for Campus Review.
//!
//! Hosts the review pipeline, caller authentication and authorization, the
//! identity provider port, student notification, and account deletion.
//! HTTP routing lives in the server crate.

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
#![allow(clippy::multiple_crate_versions)]

mod account;
mod auth;
mod config;
mod error;
mod identity;
mod notify;
mod request_response;
mod review;
mod store;

#[cfg(test)]
mod tests;

pub use account::{AccountDeletion, AccountService};
pub use auth::{
    AdministratorCaller, AuthenticationService, AuthorizationService, BEARER_PREFIX, Role,
    extract_bearer,
};
pub use config::{
    DEFAULT_FROM_EMAIL, DEFAULT_FROM_NAME, DEFAULT_MAIL_API_URL, DEFAULT_SUPPORT_EMAIL,
    IdentityConfig, MailConfig, ServiceConfig,
};
pub use error::{ApiError, IdentityError, ProfileWriteOperation};
pub use identity::{GoTrueClient, IdentityProvider, IdentityUser};
pub use notify::{NotificationService, RenderedEmail, escape_html, render_notification};
pub use request_response::{
    ApplyProfileChange, ApplyProfileChangeBody, DeleteUserBody, NotifyStudent, NotifyStudentBody,
    StrandedRequestsResponse,
};
pub use review::ReviewService;
pub use store::ReviewStore;
