//! Identity lookup endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::user::LoginResponse};

use super::AuthenticatedUser;

/// Current user's profile and API key.
///
/// The API key is issued on the first call and reused afterwards.
/// Failed authentication is a plain 401 without a `WWW-Authenticate` challenge.
#[utoipa::path(
    get,
    path = "/login",
    tag = "auth",
    security(("bearer_auth" = []), ("api_key" = [])),
    responses(
        (status = 200, description = "Caller profile", body = LoginResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> AppResult<Json<LoginResponse>> {
    let profile = state.services.users.login(&identity).await?;
    Ok(Json(profile))
}
