use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::{
    signup::dto::{ErrorResponse, SignupRequest, SignupResponse},
    state::AppState,
};

pub fn signup_routes() -> Router<AppState> {
    Router::new().route(
        "/api/signup",
        post(create_signup)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}

#[instrument(skip(state, payload))]
pub async fn create_signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, (StatusCode, Json<ErrorResponse>)> {
    let email = match payload.email.as_deref() {
        Some(e) if e.contains('@') => e,
        _ => {
            warn!("signup with missing or invalid email");
            return Err(bad_request("Valid email is required"));
        }
    };

    if let Err(e) = state.store.ensure_schema().await {
        error!(error = %e, "ensure_schema failed");
        return Err(storage_failure());
    }

    if let Err(e) = state.store.upsert(email, payload.phone.as_deref()).await {
        error!(error = %e, email = %email, "signup upsert failed");
        return Err(storage_failure());
    }

    info!(email = %email, "beta signup recorded");
    Ok(Json(SignupResponse {
        success: true,
        message: "Successfully signed up!".into(),
    }))
}

/// Pre-flights are normally answered by the CORS layer; a bare OPTIONS
/// without pre-flight headers still gets an empty 200 here.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".into(),
        }),
    )
}

fn bad_request(msg: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: msg.into() }),
    )
}

// Storage failures all map to the same generic body; the cause only goes
// to the log.
fn storage_failure() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to save signup".into(),
        }),
    )
}
