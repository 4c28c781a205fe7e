use axum::{extract::State, http::StatusCode, Json};
use eventbrite_trigger::{StaticDataStore, WEBHOOK_ID_KEY};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Reports the stored webhook id. Returns 503 when the state store cannot be
/// read.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.get(WEBHOOK_ID_KEY).await {
        Ok(webhook_id) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                webhook_id,
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "error".to_string(),
                webhook_id: None,
                error: Some(format!("State store unavailable: {}", e)),
            }),
        ),
    }
}
