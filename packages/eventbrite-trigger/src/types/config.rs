//! Node configuration for the Eventbrite trigger.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

use super::action::is_known_action;
use crate::error::{Result, TriggerError};

/// Current configuration of one trigger node.
///
/// The lifecycle manager rebuilds the remote subscription request from this
/// on every call; nothing here is persisted by the trigger itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// URL Eventbrite will POST callbacks to.
    pub callback_url: String,

    /// Organization the event belongs to. Only used for display and option
    /// loading; the subscription itself is scoped by `event_id`.
    #[serde(default)]
    pub organization_id: Option<String>,

    /// Eventbrite event the subscription is scoped to.
    pub event_id: String,

    /// Actions to subscribe to, in the order they are sent to Eventbrite.
    pub actions: Vec<String>,

    /// Expand the lightweight notification into the full object.
    ///
    /// Default: true.
    #[serde(default = "default_resolve_data")]
    pub resolve_data: bool,
}

fn default_resolve_data() -> bool {
    true
}

impl TriggerConfig {
    pub fn new(callback_url: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            callback_url: callback_url.into(),
            organization_id: None,
            event_id: event_id.into(),
            actions: Vec::new(),
            resolve_data: default_resolve_data(),
        }
    }

    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn with_actions<I, A>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.actions.extend(actions.into_iter().map(Into::into));
        self
    }

    pub fn with_resolve_data(mut self, resolve_data: bool) -> Self {
        self.resolve_data = resolve_data;
        self
    }

    /// Check everything `create` needs before it talks to Eventbrite.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.callback_url).map_err(|e| {
            TriggerError::validation(format!(
                "callback URL {:?} is not a valid URL: {}",
                self.callback_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TriggerError::validation(format!(
                "callback URL must be http(s), got {:?}",
                url.scheme()
            )));
        }

        if self.event_id.trim().is_empty() {
            return Err(TriggerError::validation("no event selected"));
        }

        if self.actions.is_empty() {
            return Err(TriggerError::validation("at least one action is required"));
        }

        let mut seen = HashSet::new();
        for action in &self.actions {
            if !is_known_action(action) {
                return Err(TriggerError::validation(format!(
                    "unknown action {:?}",
                    action
                )));
            }
            if !seen.insert(action.as_str()) {
                return Err(TriggerError::validation(format!(
                    "duplicate action {:?}",
                    action
                )));
            }
        }

        Ok(())
    }
}
