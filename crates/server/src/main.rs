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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod authorization;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use campus_review_api::{
    AccountDeletion, AccountService, ApiError, AuthorizationService, DEFAULT_FROM_EMAIL,
    DEFAULT_FROM_NAME, DEFAULT_MAIL_API_URL, DEFAULT_SUPPORT_EMAIL, GoTrueClient, IdentityConfig,
    IdentityProvider, MailConfig, NotificationService, NotifyStudent, ReviewService,
    ServiceConfig, StrandedRequestsResponse,
};
use campus_review_domain::ProfileDefaults;
use campus_review_persistence::SqlitePersistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::authorization::AuthorizationHeader;

/// Campus Review Server - administrator review of profile change requests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "CAMPUS_REVIEW_DATABASE")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(long, env = "CAMPUS_REVIEW_BIND", default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, env = "CAMPUS_REVIEW_PORT", default_value_t = 3000)]
    port: u16,

    /// Base URL of the identity provider
    #[arg(long, env = "SUPABASE_URL")]
    identity_url: String,

    /// Service-role key for administrative identity calls
    #[arg(long, env = "SUPABASE_SERVICE_ROLE_KEY", hide_env_values = true)]
    service_role_key: String,

    /// Base URL of the mail API
    #[arg(long, env = "RESEND_API_URL", default_value = DEFAULT_MAIL_API_URL)]
    mail_api_url: String,

    /// Mail API key; notifications are refused without it
    #[arg(long, env = "RESEND_API_KEY", hide_env_values = true)]
    mail_api_key: Option<String>,

    /// Sender address for notification email
    #[arg(long, env = "FROM_EMAIL", default_value = DEFAULT_FROM_EMAIL)]
    from_email: String,

    /// Sender display name for notification email
    #[arg(long, env = "FROM_NAME", default_value = DEFAULT_FROM_NAME)]
    from_name: String,

    /// Support address shown in notification email
    #[arg(long, env = "SUPPORT_EMAIL", default_value = DEFAULT_SUPPORT_EMAIL)]
    support_email: String,

    /// Role given to profiles created during approval
    #[arg(long, env = "CAMPUS_REVIEW_DEFAULT_ROLE", default_value = "student")]
    default_role: String,

    /// Account status given to profiles created during approval
    #[arg(long, env = "CAMPUS_REVIEW_DEFAULT_STATUS", default_value = "active")]
    default_account_status: String,
}

impl Args {
    /// Assembles the service configuration from the parsed arguments.
    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            identity: IdentityConfig {
                base_url: self.identity_url.clone(),
                service_role_key: self.service_role_key.clone(),
            },
            mail: MailConfig {
                api_url: self.mail_api_url.clone(),
                api_key: self.mail_api_key.clone().filter(|key| !key.is_empty()),
                from_email: self.from_email.clone(),
                from_name: self.from_name.clone(),
                support_email: self.support_email.clone(),
            },
            profile_defaults: ProfileDefaults {
                role: self.default_role.clone(),
                status: self.default_account_status.clone(),
            },
        }
    }
}

/// Application state shared across handlers.
///
/// The services share one store behind a single lock.
#[derive(Clone)]
struct AppState {
    store: Arc<Mutex<SqlitePersistence>>,
    identity: Arc<dyn IdentityProvider>,
    review: Arc<ReviewService<SqlitePersistence>>,
    accounts: Arc<AccountService<SqlitePersistence>>,
    notifier: Arc<NotificationService>,
}

impl AppState {
    fn new(
        persistence: SqlitePersistence,
        identity: Arc<dyn IdentityProvider>,
        mail: MailConfig,
        profile_defaults: ProfileDefaults,
    ) -> Self {
        let store: Arc<Mutex<SqlitePersistence>> = Arc::new(Mutex::new(persistence));
        let review: ReviewService<SqlitePersistence> =
            ReviewService::new(Arc::clone(&store), Arc::clone(&identity), profile_defaults);
        let accounts: AccountService<SqlitePersistence> =
            AccountService::new(Arc::clone(&store), Arc::clone(&identity));

        Self {
            store,
            identity,
            review: Arc::new(review),
            accounts: Arc::new(accounts),
            notifier: Arc::new(NotificationService::new(mail)),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Stable machine-readable error code.
    code: String,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error code.
    code: &'static str,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            code: self.code.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::MissingCredential | ApiError::InvalidCredential { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::AlreadyHandled { .. } => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(code = err.code(), error = %err, "Request failed");
        } else {
            warn!(code = err.code(), error = %err, "Request rejected");
        }

        Self {
            status,
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/apply-profile-change`.
///
/// Approves or rejects a pending change request.
async fn handle_apply_profile_change(
    AxumState(app_state): AxumState<AppState>,
    AuthorizationHeader(authorization): AuthorizationHeader,
    body: Bytes,
) -> Result<&'static str, HttpError> {
    app_state
        .review
        .apply_profile_change(authorization.as_deref(), &body)
        .await?;
    Ok("ok")
}

/// Handler for POST `/notify-student`.
///
/// Emails a student the outcome of their request.
async fn handle_notify_student(
    AxumState(app_state): AxumState<AppState>,
    AuthorizationHeader(authorization): AuthorizationHeader,
    body: Bytes,
) -> Result<&'static str, HttpError> {
    let notification: NotifyStudent = NotifyStudent::parse(&body)?;
    AuthorizationService::require_admin(
        &app_state.store,
        app_state.identity.as_ref(),
        authorization.as_deref(),
    )
    .await?;

    app_state.notifier.send(&notification).await?;
    Ok("ok")
}

/// Handler for POST `/delete-user`.
///
/// Removes a user's profile and identity account.
async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    AuthorizationHeader(authorization): AuthorizationHeader,
    body: Bytes,
) -> Result<String, HttpError> {
    let deletion: AccountDeletion = app_state
        .accounts
        .delete_user(authorization.as_deref(), &body)
        .await?;
    Ok(deletion.message())
}

/// Handler for GET `/change-requests/stranded`.
///
/// Lists pending requests whose approval stopped part way.
async fn handle_list_stranded(
    AxumState(app_state): AxumState<AppState>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<Json<StrandedRequestsResponse>, HttpError> {
    let response: StrandedRequestsResponse = app_state
        .review
        .list_stranded_requests(authorization.as_deref())
        .await?;
    Ok(Json(response))
}

/// Handler for GET `/health`.
async fn handle_health() -> &'static str {
    "ok"
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/apply-profile-change", post(handle_apply_profile_change))
        .route("/notify-student", post(handle_notify_student))
        .route("/delete-user", post(handle_delete_user))
        .route("/change-requests/stranded", get(handle_list_stranded))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Campus Review Server");

    let config: ServiceConfig = args.service_config();
    if config.mail.api_key.is_none() {
        warn!("No mail API key configured; student notifications will be refused");
    }

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let identity: Arc<dyn IdentityProvider> = Arc::new(GoTrueClient::new(config.identity));
    let app_state: AppState =
        AppState::new(persistence, identity, config.mail, config.profile_defaults);

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
