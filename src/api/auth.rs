use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::infrastructure::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    if payload.username.is_empty() || payload.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Username and password are required" })),
        )
            .into_response();
    }

    tracing::info!("Login attempt for user: {}", payload.username);

    match state
        .store
        .verify_user(&payload.username, &payload.password)
        .await
    {
        Ok(Some(user)) => {
            // The credential hash never leaves the store layer.
            Json(json!({
                "success": true,
                "data": {
                    "id": user.id,
                    "username": user.username,
                    "role": user.role,
                    "createdAt": user.created_at
                }
            }))
            .into_response()
        }
        Ok(None) => {
            tracing::warn!("invalid credentials for user: {}", payload.username);
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "error": "Invalid credentials" })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("login failed for {}: {}", payload.username, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Login failed" })),
            )
                .into_response()
        }
    }
}
