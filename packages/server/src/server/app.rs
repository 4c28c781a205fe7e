//! Application setup and router construction.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use eventbrite_trigger::{Gateway, StaticDataStore, WebhookNormalizer};
use tower_http::trace::TraceLayer;

use crate::config::WEBHOOK_PATH;
use crate::server::routes::{health_handler, webhook_handler};
use crate::sink::RecordSender;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub normalizer: Arc<WebhookNormalizer<Arc<dyn Gateway>>>,
    pub store: Arc<dyn StaticDataStore>,
    pub resolve_data: bool,
    pub records: RecordSender,
}

impl AppState {
    pub fn new(
        gateway: Arc<dyn Gateway>,
        store: Arc<dyn StaticDataStore>,
        resolve_data: bool,
        records: RecordSender,
    ) -> Self {
        Self {
            normalizer: Arc::new(WebhookNormalizer::new(gateway)),
            store,
            resolve_data,
            records,
        }
    }
}

/// Build the axum router for the webhook receiver.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(webhook_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
