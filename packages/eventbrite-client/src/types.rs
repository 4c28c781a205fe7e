use serde::{Deserialize, Serialize};

/// Body for `POST /webhooks/`.
///
/// Eventbrite expects `actions` as a single comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhookRequest {
    pub endpoint_url: String,
    pub actions: String,
    pub event_id: String,
}

impl CreateWebhookRequest {
    pub fn new(
        endpoint_url: impl Into<String>,
        actions: &[String],
        event_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            actions: actions.join(","),
            event_id: event_id.into(),
        }
    }
}

/// Pagination block attached to Eventbrite list responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub object_count: Option<u64>,
    #[serde(default)]
    pub page_number: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default)]
    pub page_count: Option<u64>,
    #[serde(default)]
    pub continuation: Option<String>,
    #[serde(default)]
    pub has_more_items: bool,
}

/// Error body returned by Eventbrite on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_joins_actions_in_order() {
        let actions = vec!["order.placed".to_string(), "attendee.checked_in".to_string()];
        let req = CreateWebhookRequest::new("https://hooks.example.com/webhook", &actions, "123");

        assert_eq!(req.actions, "order.placed,attendee.checked_in");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["endpoint_url"], "https://hooks.example.com/webhook");
        assert_eq!(json["event_id"], "123");
    }

    #[test]
    fn test_pagination_parses_continuation() {
        let json = r#"{"has_more_items": true, "continuation": "abc", "page_size": 50}"#;
        let p: Pagination = serde_json::from_str(json).unwrap();
        assert!(p.has_more_items);
        assert_eq!(p.continuation.as_deref(), Some("abc"));
    }
}
