//! HTTP handler for token issuance

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::core::error::StorefrontResult;
use crate::server::state::AppState;

/// Request body for token issuance
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Response carrying a freshly minted bearer token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Routes for token issuance
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/token", post(issue_token))
        .with_state(state)
}

/// POST /token
///
/// The only unauthenticated API endpoint: it trades a username and
/// password for a bearer token. Wrong credentials get a 401 without
/// revealing whether the username exists.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> StorefrontResult<Json<TokenResponse>> {
    let token = state.tokens.issue(&request.username, &request.password)?;

    Ok(Json(TokenResponse { token }))
}
