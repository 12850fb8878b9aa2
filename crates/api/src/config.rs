// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service configuration.
//!
//! Values are assembled once by the binary and passed in at construction.
//! Nothing in this crate reads the environment.

use campus_review_domain::ProfileDefaults;

/// Default base URL of the mail API.
pub const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com";
/// Default sender address.
pub const DEFAULT_FROM_EMAIL: &str = "onboarding@resend.dev";
/// Default sender display name.
pub const DEFAULT_FROM_NAME: &str = "Campus Connect";
/// Default support address shown in notification emails.
pub const DEFAULT_SUPPORT_EMAIL: &str = "compusconnectsupport@gmail.com";

/// Connection settings for the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Base URL of the identity provider, without the `/auth/v1` suffix.
    pub base_url: String,
    /// Service-role key used for administrative calls.
    pub service_role_key: String,
}

/// Settings for outbound notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// Base URL of the mail API.
    pub api_url: String,
    /// API key; notifications fail when absent.
    pub api_key: Option<String>,
    /// Sender address.
    pub from_email: String,
    /// Sender display name.
    pub from_name: String,
    /// Support address included in message bodies.
    pub support_email: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_MAIL_API_URL.to_string(),
            api_key: None,
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            from_name: DEFAULT_FROM_NAME.to_string(),
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
        }
    }
}

impl MailConfig {
    /// The `From` header value, `"{name} <{address}>"`.
    #[must_use]
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}

/// Complete configuration of the review service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Identity provider settings.
    pub identity: IdentityConfig,
    /// Notification email settings.
    pub mail: MailConfig,
    /// Defaults applied to profiles created during approval.
    pub profile_defaults: ProfileDefaults,
}
