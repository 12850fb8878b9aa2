// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student notification email.
//!
//! Independent of the review pipeline: a client sends the notification
//! after a review, and a delivery failure never affects the review.

use campus_review_domain::RequestStatus;
use reqwest::{Response, StatusCode};
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::config::MailConfig;
use crate::error::ApiError;
use crate::request_response::NotifyStudent;

const APPROVED_SUBJECT: &str = "Campus Connect Account Approved";
const REJECTED_SUBJECT: &str = "Update on Your Campus Connect Account Request";

/// A rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Escapes text for inclusion in HTML element content or attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the message announcing `status`.
///
/// Pending has no message; it renders the rejection text, but callers
/// validate the status first.
#[must_use]
pub fn render_notification(
    status: RequestStatus,
    name: Option<&str>,
    support_email: &str,
) -> RenderedEmail {
    let greeting: String = format!(
        "Hi {},",
        escape_html(name.filter(|n| !n.is_empty()).unwrap_or("there"))
    );
    let support: String = escape_html(support_email);

    let (subject, paragraphs): (&str, String) = if status == RequestStatus::Approved {
        (
            APPROVED_SUBJECT,
            format!(
                "<p>Your request to join <b>Campus Connect</b> has been approved. \
                 Your account is now active, and you can log in using the email address \
                 you registered with.</p>\
                 <p><b>Next steps:</b><br/>\
                 &bull; Log in to your account<br/>\
                 &bull; Complete your profile if needed<br/>\
                 &bull; Start using the platform and accessing available features</p>\
                 <p>If you have any questions or experience any issues, please contact our \
                 support team at <a href=\"mailto:{support}\">{support}</a>.</p>"
            ),
        )
    } else {
        (
            REJECTED_SUBJECT,
            format!(
                "<p>Thank you for your interest in joining <b>Campus Connect</b>. \
                 After reviewing your request, we are unable to approve your account \
                 at this time.</p>\
                 <p>This may be due to missing information, eligibility requirements, or \
                 verification issues. If you believe this decision was made in error, you \
                 can contact our support team for clarification.</p>\
                 <p>Support: <a href=\"mailto:{support}\">{support}</a></p>"
            ),
        )
    };

    let html: String = format!(
        "<div style=\"font-family: Arial, sans-serif; font-size: 15px; color: #111; \
         line-height: 1.6;\">\
         <p>{greeting}</p>\
         {paragraphs}\
         <p style=\"margin-top: 24px;\">Regards,<br/><b>The Campus Connect Team</b></p>\
         </div>"
    );

    RenderedEmail {
        subject: subject.to_string(),
        html,
    }
}

#[derive(Serialize)]
struct OutboundEmail<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Sends notification email through a Resend-compatible API.
#[derive(Clone)]
pub struct NotificationService {
    client: reqwest::Client,
    config: MailConfig,
}

impl NotificationService {
    /// Creates a notification service.
    #[must_use]
    pub fn new(config: MailConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a notification service reusing an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, config: MailConfig) -> Self {
        Self { client, config }
    }

    /// Renders and sends the notification.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MailNotConfigured` when no API key is configured
    /// and `ApiError::MailDeliveryFailed` when the mail API cannot be
    /// reached or answers with a non-success status.
    #[instrument(skip_all, fields(status = %notification.status))]
    pub async fn send(&self, notification: &NotifyStudent) -> Result<(), ApiError> {
        let api_key: &str = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ApiError::MailNotConfigured)?;

        let email: RenderedEmail = render_notification(
            notification.status,
            notification.name.as_deref(),
            &self.config.support_email,
        );
        let payload: OutboundEmail<'_> = OutboundEmail {
            from: self.config.sender(),
            to: [notification.email.as_str()],
            subject: &email.subject,
            html: &email.html,
        };

        let url: String = format!("{}/emails", self.config.api_url.trim_end_matches('/'));
        let response: Response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Mail API unreachable");
                ApiError::MailDeliveryFailed {
                    status: 0,
                    body: e.to_string(),
                }
            })?;

        let status: StatusCode = response.status();
        let body: String = response.text().await.unwrap_or_default();
        if !status.is_success() {
            error!(status = status.as_u16(), %body, "Mail API rejected notification");
            return Err(ApiError::MailDeliveryFailed {
                status: status.as_u16(),
                body,
            });
        }

        info!(status = %notification.status, "Student notification sent");
        Ok(())
    }
}
