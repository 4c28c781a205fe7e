//! Inbound webhook normalization.
//!
//! Eventbrite callbacks only carry a pointer (`api_url`) to the object that
//! changed. The normalizer validates that pointer and, when asked, resolves
//! it into the full object before handing records to the workflow.

use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;
use crate::traits::gateway::{ApiRequest, Gateway};
use crate::types::notification::{test_placeholder, InboundNotification};

/// Turns one callback body into workflow records.
///
/// Holds no mutable state, so concurrent callbacks can share one instance.
pub struct WebhookNormalizer<G> {
    gateway: G,
}

impl<G: Gateway> WebhookNormalizer<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Validate and shape a callback body.
    ///
    /// Only an absent `api_url` fails in every mode.
    ///
    /// - `resolve_data == false`: the body itself, unchanged.
    /// - test delivery: a single placeholder record, no fetch.
    /// - otherwise: the JSON behind `api_url`. Fetch errors propagate.
    pub async fn handle(&self, body: Value, resolve_data: bool) -> Result<Vec<Value>> {
        let notification = InboundNotification::from_body(&body)?;

        if !resolve_data {
            debug!(api_url = %notification.api_url, "Passing notification through unresolved");
            return Ok(vec![body]);
        }

        let api_url = notification.resolvable_url()?;
        if notification.is_test_delivery() {
            info!("Test webhook received, emitting placeholder");
            return Ok(vec![test_placeholder()]);
        }

        debug!(
            api_url,
            action = notification.action().unwrap_or("unknown"),
            "Resolving notification"
        );
        let object = self
            .gateway
            .request(ApiRequest::get_url(api_url))
            .await?;

        Ok(vec![object])
    }
}
