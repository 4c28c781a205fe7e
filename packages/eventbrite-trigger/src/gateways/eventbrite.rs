//! [`Gateway`] backed by the Eventbrite REST client.

use async_trait::async_trait;
use eventbrite_client::{EventbriteClient, EventbriteError, Method};
use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};
use crate::traits::gateway::{ApiRequest, Gateway};

impl From<EventbriteError> for GatewayError {
    fn from(e: EventbriteError) -> Self {
        match e {
            EventbriteError::Api {
                status: 404,
                message,
            } => GatewayError::NotFound(message),
            EventbriteError::Api { status, message } => GatewayError::Api { status, message },
            EventbriteError::Network(msg) | EventbriteError::Config(msg) => {
                GatewayError::Transport(msg)
            }
            EventbriteError::Parse(msg) => GatewayError::Parse(msg),
        }
    }
}

#[async_trait]
impl Gateway for EventbriteClient {
    async fn request(&self, request: ApiRequest) -> GatewayResult<Value> {
        let ApiRequest {
            method,
            path,
            body,
            query,
            full_url,
        } = request;

        Ok(EventbriteClient::request(
            self,
            method,
            &path,
            body.as_ref(),
            &query,
            full_url.as_deref(),
        )
        .await?)
    }

    async fn request_all_items(
        &self,
        resource: &str,
        method: Method,
        path: &str,
    ) -> GatewayResult<Vec<Value>> {
        Ok(EventbriteClient::request_all_items(self, resource, method, path, None, &[]).await?)
    }
}
