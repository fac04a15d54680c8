use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use super::artwork_handlers::GalleryState;
use super::error_response::ErrorResponse;
use super::models::{AdminSessionRequest, ApiResponse, SystemInfo};
use crate::domain::contact::ContactMessage;

/// Get system information
pub async fn get_system_info() -> Json<SystemInfo> {
    Json(SystemInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
    })
}

/// Validate and relay a contact form submission
pub async fn submit_contact(
    State(state): State<Arc<GalleryState>>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<ApiResponse>, ErrorResponse> {
    state
        .send_contact
        .execute(message)
        .await
        .map_err(|e| ErrorResponse::from(&e))?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Message sent successfully! We'll be in touch soon.".to_string(),
    }))
}

/// Admin password gate
pub async fn admin_session(
    State(state): State<Arc<GalleryState>>,
    Json(request): Json<AdminSessionRequest>,
) -> Result<Json<ApiResponse>, ErrorResponse> {
    let authenticated = state.auth.verify(&request.password).map_err(|e| {
        warn!("Admin login attempted without a configured password");
        ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    if authenticated {
        Ok(Json(ApiResponse {
            success: true,
            message: "Authenticated".to_string(),
        }))
    } else {
        Err(ErrorResponse::new(
            StatusCode::UNAUTHORIZED,
            "Incorrect password. Please try again.",
        ))
    }
}
