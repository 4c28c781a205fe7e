//! Shape of the callbacks Eventbrite delivers.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Result, TriggerError};

/// Substring of the `api_url` sent by Eventbrite's "send test" button.
/// That URL cannot be fetched.
pub const TEST_API_URL_MARKER: &str = "api-endpoint-to-fetch-object-details";

pub const TEST_PLACEHOLDER_MESSAGE: &str = "Test received. To display actual data of object get the webhook triggered by performing the action which triggers it.";

/// A lightweight webhook notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundNotification {
    /// URL of the object that triggered the callback. Kept as raw JSON:
    /// only resolving requires it to be a string.
    pub api_url: Value,

    /// Source details (action, user id, webhook id). Opaque to us.
    #[serde(default)]
    pub config: Option<Value>,
}

impl InboundNotification {
    /// Validate a raw callback body. Only an absent `api_url` is rejected.
    pub fn from_body(body: &Value) -> Result<Self> {
        let Some(api_url) = body.get("api_url") else {
            return Err(TriggerError::validation(
                "the received data does not contain the required \"api_url\" property",
            ));
        };

        Ok(Self {
            api_url: api_url.clone(),
            config: body.get("config").cloned(),
        })
    }

    /// The URL to fetch when resolving the notification.
    pub fn resolvable_url(&self) -> Result<&str> {
        self.api_url.as_str().ok_or_else(|| {
            TriggerError::validation(format!(
                "\"api_url\" must be a string to be resolved, got {}",
                self.api_url
            ))
        })
    }

    /// True for the non-resolvable URL of a test delivery.
    pub fn is_test_delivery(&self) -> bool {
        self.api_url
            .as_str()
            .is_some_and(|url| url.contains(TEST_API_URL_MARKER))
    }

    /// The `config.action` field, when Eventbrite sent one.
    pub fn action(&self) -> Option<&str> {
        self.config.as_ref()?.get("action")?.as_str()
    }
}

/// Record emitted in place of real data for a test delivery.
pub fn test_placeholder() -> Value {
    json!({ "placeholder": TEST_PLACEHOLDER_MESSAGE })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_reads_api_url_and_config() {
        let body = json!({
            "api_url": "https://www.eventbriteapi.com/v3/orders/1/",
            "config": {"action": "order.placed", "webhook_id": "55"}
        });
        let n = InboundNotification::from_body(&body).unwrap();
        assert_eq!(
            n.resolvable_url().unwrap(),
            "https://www.eventbriteapi.com/v3/orders/1/"
        );
        assert_eq!(n.action(), Some("order.placed"));
        assert!(!n.is_test_delivery());
    }

    #[test]
    fn test_missing_api_url_is_validation_error() {
        for body in [json!({}), json!({"config": {}})] {
            let err = InboundNotification::from_body(&body).unwrap_err();
            assert!(matches!(err, TriggerError::Validation { .. }));
        }
    }

    #[test]
    fn test_null_or_non_string_api_url_accepted_but_not_resolvable() {
        for api_url in [json!(null), json!(5)] {
            let n = InboundNotification::from_body(&json!({ "api_url": api_url.clone() })).unwrap();
            assert_eq!(n.api_url, api_url);
            assert!(!n.is_test_delivery());

            let err = n.resolvable_url().unwrap_err();
            assert!(err.to_string().contains("must be a string"));
        }
    }

    #[test]
    fn test_detects_test_delivery() {
        let n = InboundNotification::from_body(&json!({
            "api_url": "https://www.eventbriteapi.com/api-endpoint-to-fetch-object-details/"
        }))
        .unwrap();
        assert!(n.is_test_delivery());
    }
}
