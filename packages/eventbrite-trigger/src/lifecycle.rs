//! Webhook subscription lifecycle.
//!
//! Keeps the remote Eventbrite webhook in step with the activation state of
//! one trigger node. The stored webhook id is the only durable state; every
//! other field of the subscription is rebuilt from [`TriggerConfig`] on each
//! call.
//!
//! ```text
//! Absent --create--> Present --delete (success)--> Absent
//! ```
//!
//! `check_exists` is read-only and never clears the stored id. Only a
//! successful `delete` does.

use eventbrite_client::CreateWebhookRequest;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Result, TriggerError};
use crate::traits::gateway::{ApiRequest, Gateway};
use crate::traits::store::{StaticDataStore, WEBHOOK_ID_KEY};
use crate::types::config::TriggerConfig;

/// Outcome of [`SubscriptionManager::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The stored subscription was verified remotely.
    Existing,
    /// A new subscription was registered.
    Created,
}

/// Owns the exists/create/delete cycle for one node instance.
///
/// Hosts must not run `create` and `delete` concurrently for the same node.
pub struct SubscriptionManager<G, S> {
    gateway: G,
    store: S,
    config: TriggerConfig,
}

impl<G: Gateway, S: StaticDataStore> SubscriptionManager<G, S> {
    pub fn new(gateway: G, store: S, config: TriggerConfig) -> Self {
        Self {
            gateway,
            store,
            config,
        }
    }

    /// Replace the node configuration used by subsequent calls.
    pub fn set_config(&mut self, config: TriggerConfig) {
        self.config = config;
    }

    /// The stored webhook id. Not verified against Eventbrite.
    pub async fn webhook_id(&self) -> Result<Option<String>> {
        Ok(self.store.get(WEBHOOK_ID_KEY).await?)
    }

    /// Whether the stored subscription still exists remotely.
    ///
    /// Returns `false` without a remote call when nothing is stored. Any
    /// remote failure also yields `false`: a 404 and a dropped connection
    /// look the same here, so a transient outage during activation leads to
    /// a second subscription being created.
    pub async fn check_exists(&self) -> Result<bool> {
        let Some(webhook_id) = self.webhook_id().await? else {
            debug!("No stored webhook id");
            return Ok(false);
        };

        match self.gateway.request(ApiRequest::get(webhook_path(&webhook_id))).await {
            Ok(_) => {
                debug!(webhook_id = %webhook_id, "Webhook exists");
                Ok(true)
            }
            Err(e) => {
                warn!(webhook_id = %webhook_id, error = %e, "Webhook lookup failed, treating as absent");
                Ok(false)
            }
        }
    }

    /// Register a new subscription and persist its id.
    ///
    /// Remote failures propagate so activation aborts.
    pub async fn create(&self) -> Result<bool> {
        self.config.validate()?;

        let request = CreateWebhookRequest::new(
            &self.config.callback_url,
            &self.config.actions,
            &self.config.event_id,
        );
        info!(
            event_id = %request.event_id,
            actions = %request.actions,
            endpoint_url = %request.endpoint_url,
            "Creating Eventbrite webhook"
        );

        let body = serde_json::to_value(&request)?;
        let response = self
            .gateway
            .request(ApiRequest::post("/webhooks/", body))
            .await?;

        let webhook_id = response_id(&response).ok_or_else(|| {
            TriggerError::InvalidResponse(format!("create response has no id: {}", response))
        })?;

        self.store.set(WEBHOOK_ID_KEY, &webhook_id).await?;
        info!(webhook_id = %webhook_id, "Webhook created");
        Ok(true)
    }

    /// Remove the stored subscription remotely, then forget it locally.
    ///
    /// Fails with [`TriggerError::NoSubscription`] when nothing is stored.
    /// Returns `false` and keeps the id when the remote call fails or
    /// Eventbrite does not report success, so a later retry can clean up.
    pub async fn delete(&self) -> Result<bool> {
        let webhook_id = self
            .webhook_id()
            .await?
            .ok_or(TriggerError::NoSubscription)?;

        let response = match self
            .gateway
            .request(ApiRequest::delete(webhook_path(&webhook_id)))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(webhook_id = %webhook_id, error = %e, "Webhook delete failed, keeping id");
                return Ok(false);
            }
        };

        if !response.get("success").is_some_and(is_truthy) {
            warn!(webhook_id = %webhook_id, response = %response, "Eventbrite did not confirm delete");
            return Ok(false);
        }

        self.store.delete(WEBHOOK_ID_KEY).await?;
        info!(webhook_id = %webhook_id, "Webhook deleted");
        Ok(true)
    }

    /// Verify the stored subscription, creating one when it is absent.
    pub async fn activate(&self) -> Result<Activation> {
        if self.check_exists().await? {
            return Ok(Activation::Existing);
        }
        self.create().await?;
        Ok(Activation::Created)
    }

    /// Delete the stored subscription if there is one.
    ///
    /// Returns `false` without a remote call when nothing is stored.
    pub async fn deactivate(&self) -> Result<bool> {
        if self.webhook_id().await?.is_none() {
            debug!("Nothing to deactivate");
            return Ok(false);
        }
        self.delete().await
    }
}

fn webhook_path(webhook_id: &str) -> String {
    format!("/webhooks/{}/", webhook_id)
}

/// Eventbrite ids are strings, but accept numbers too.
fn response_id(response: &Value) -> Option<String> {
    match response.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
