//! Eventbrite callback endpoint.
//!
//! Eventbrite gets its acknowledgement as soon as the body is known to carry
//! an `api_url` key. Resolving the notification and emitting records happens in a
//! background task so slow lookups never hold up the callback.

use axum::{extract::State, http::StatusCode, Json};
use eventbrite_trigger::InboundNotification;
use serde_json::{json, Value};

use crate::server::app::AppState;

pub async fn webhook_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let notification = match InboundNotification::from_body(&body) {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected Eventbrite callback");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            );
        }
    };

    tracing::info!(
        api_url = %notification.api_url,
        action = notification.action().unwrap_or("unknown"),
        "Eventbrite callback received"
    );

    tokio::spawn(async move {
        match state.normalizer.handle(body, state.resolve_data).await {
            Ok(records) => {
                for record in records {
                    if state.records.send(record).await.is_err() {
                        tracing::error!("Record sink closed, dropping record");
                        break;
                    }
                }
            }
            Err(e) => {
                tracing::error!(
                    api_url = %notification.api_url,
                    error = %e,
                    "Failed to process Eventbrite callback"
                );
            }
        }
    });

    (StatusCode::OK, Json(json!({ "received": true })))
}
