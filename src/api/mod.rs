//! API handlers for the reading lists REST endpoints

pub mod auth;
pub mod health;
pub mod openapi;
pub mod reading_lists;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header::AUTHORIZATION, request::Parts},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{
    access::Requester,
    error::{AppError, AppResult},
    models::{user::IdentityClaims, Identity},
    AppState,
};

/// Empty success acknowledgement, serialized as `{}`
#[derive(Debug, Serialize, ToSchema)]
pub struct Acknowledgement {}

/// Credentials presented with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// `Authorization: Bearer <jwt>`
    Bearer(String),
    /// `Authorization: ApiKey <username>:<key>` or `?username=..&api_key=..`
    ApiKey { username: String, key: String },
}

#[derive(Debug, Deserialize)]
struct ApiKeyParams {
    username: Option<String>,
    api_key: Option<String>,
}

/// Parse an Authorization header value
pub fn parse_authorization(value: &str) -> AppResult<Credentials> {
    let (scheme, rest) = value
        .split_once(' ')
        .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;
    let rest = rest.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !rest.is_empty() {
        return Ok(Credentials::Bearer(rest.to_string()));
    }

    if scheme.eq_ignore_ascii_case("apikey") {
        if let Some((username, key)) = rest.split_once(':') {
            if !username.is_empty() && !key.is_empty() {
                return Ok(Credentials::ApiKey {
                    username: username.to_string(),
                    key: key.to_string(),
                });
            }
        }
    }

    Err(AppError::Authentication("Invalid authorization header format".to_string()))
}

/// Credentials from the Authorization header, falling back to query parameters
fn credentials(parts: &Parts) -> AppResult<Option<Credentials>> {
    if let Some(value) = parts.headers.get(AUTHORIZATION) {
        let value = value
            .to_str()
            .map_err(|_| AppError::Authentication("Invalid authorization header".to_string()))?;
        return parse_authorization(value).map(Some);
    }

    let params = Query::<ApiKeyParams>::try_from_uri(&parts.uri).ok();
    Ok(params.and_then(|Query(params)| match (params.username, params.api_key) {
        (Some(username), Some(key)) => Some(Credentials::ApiKey { username, key }),
        _ => None,
    }))
}

/// Resolve the caller's identity; `None` when no credentials were presented
async fn resolve_identity(parts: &Parts, state: &AppState) -> AppResult<Option<Identity>> {
    let identity = match credentials(parts)? {
        None => return Ok(None),
        Some(Credentials::Bearer(token)) => {
            let auth = &state.config.auth;
            let claimed = IdentityClaims::from_token(&token, &auth.jwt_secret, auth.jwt_leeway_seconds)
                .map_err(|e| AppError::Authentication(e.to_string()))?
                .identity();
            // A valid token for a user that was never provisioned is still unauthenticated
            let user = state.services.users.known_user(&claimed).await?;
            Identity::from(&user)
        }
        Some(Credentials::ApiKey { username, key }) => {
            state
                .services
                .users
                .authenticate_api_key(&username, &key)
                .await?
        }
    };
    Ok(Some(identity))
}

/// Extractor for an authenticated caller, rejects with a plain 401
pub struct AuthenticatedUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_identity(parts, state)
            .await?
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError::Authentication("Missing credentials".to_string()))
    }
}

/// Extractor for endpoints open to anonymous callers.
/// Missing or invalid credentials both yield `Requester::Anonymous`.
pub struct MaybeAuthenticated(pub Requester);

#[async_trait]
impl FromRequestParts<AppState> for MaybeAuthenticated {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match resolve_identity(parts, state).await {
            Ok(Some(identity)) => Ok(MaybeAuthenticated(Requester::User(identity))),
            Ok(None) => Ok(MaybeAuthenticated(Requester::Anonymous)),
            Err(AppError::Authentication(reason)) => {
                tracing::debug!(%reason, "Treating caller as anonymous");
                Ok(MaybeAuthenticated(Requester::Anonymous))
            }
            Err(e) => Err(e),
        }
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Identity
        .route("/login", get(auth::login))
        // Reading lists
        .route("/reading_list/create", post(reading_lists::create_reading_list))
        .route("/reading_list/read", get(reading_lists::read_reading_lists))
        .route("/reading_list/delete", post(reading_lists::delete_reading_list))
        .route("/reading_list/add_book", post(reading_lists::add_book))
        .route("/reading_list/update_book", post(reading_lists::update_book))
        .route("/reading_list/delete_book", post(reading_lists::delete_book))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
