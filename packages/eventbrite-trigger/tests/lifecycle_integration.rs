//! End-to-end tests against a fake Eventbrite API.
//!
//! These drive the real `EventbriteClient` through the lifecycle manager and
//! the normalizer:
//! 1. Activate (create webhook)
//! 2. Re-activate (verify existing webhook)
//! 3. Resolve an inbound notification
//! 4. Deactivate (delete webhook)

use eventbrite_client::EventbriteClient;
use eventbrite_trigger::{
    Activation, MemoryStore, StaticDataStore, SubscriptionManager, TriggerConfig, TriggerError,
    WebhookNormalizer, WEBHOOK_ID_KEY,
};
use serde_json::json;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

fn test_config() -> TriggerConfig {
    TriggerConfig::new("https://hooks.example.com/webhook", "1001")
        .with_actions(["order.placed", "order.refunded"])
}

#[tokio::test]
async fn test_full_subscription_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/webhooks/"))
        .and(matchers::header("authorization", "Bearer test-token"))
        .and(matchers::body_json(json!({
            "endpoint_url": "https://hooks.example.com/webhook",
            "actions": "order.placed,order.refunded",
            "event_id": "1001"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "880",
            "endpoint_url": "https://hooks.example.com/webhook",
            "actions": "order.placed,order.refunded",
            "event_id": "1001"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/webhooks/880/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "880"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(matchers::method("DELETE"))
        .and(matchers::path("/webhooks/880/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventbriteClient::new("test-token").with_base_url(server.uri());
    let store = MemoryStore::new();
    let manager = SubscriptionManager::new(client, store.clone(), test_config());

    assert_eq!(manager.activate().await.unwrap(), Activation::Created);
    assert_eq!(
        store.get(WEBHOOK_ID_KEY).await.unwrap().as_deref(),
        Some("880")
    );

    assert_eq!(manager.activate().await.unwrap(), Activation::Existing);

    assert!(manager.deactivate().await.unwrap());
    assert_eq!(store.get(WEBHOOK_ID_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_deleted_remotely_is_recreated() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/webhooks/old/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "NOT_FOUND",
            "error_description": "The webhook you requested does not exist."
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/webhooks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "new"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventbriteClient::new("test-token").with_base_url(server.uri());
    let store = MemoryStore::with_value(WEBHOOK_ID_KEY, "old");
    let manager = SubscriptionManager::new(client, store.clone(), test_config());

    assert_eq!(manager.activate().await.unwrap(), Activation::Created);
    assert_eq!(
        store.get(WEBHOOK_ID_KEY).await.unwrap().as_deref(),
        Some("new")
    );
}

#[tokio::test]
async fn test_create_rejected_aborts_activation() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/webhooks/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "NOT_AUTHORIZED",
            "error_description": "You do not have permission to access this event."
        })))
        .mount(&server)
        .await;

    let client = EventbriteClient::new("test-token").with_base_url(server.uri());
    let store = MemoryStore::new();
    let manager = SubscriptionManager::new(client, store.clone(), test_config());

    let err = manager.activate().await.unwrap_err();
    assert!(matches!(err, TriggerError::Remote(_)));
    assert!(err.to_string().contains("permission"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_notification_resolves_against_api_url() {
    let server = MockServer::start().await;
    let order = json!({"id": "555", "status": "placed", "email": "guest@example.com"});

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/v3/orders/555/"))
        .and(matchers::header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order.clone()))
        .expect(1)
        .mount(&server)
        .await;

    // Base URL deliberately unrelated: the callback's absolute URL wins.
    let client = EventbriteClient::new("test-token").with_base_url("http://unused.invalid");
    let normalizer = WebhookNormalizer::new(client);

    let body = json!({
        "api_url": format!("{}/v3/orders/555/", server.uri()),
        "config": {"action": "order.placed", "webhook_id": "880"}
    });
    let records = normalizer.handle(body, true).await.unwrap();
    assert_eq!(records, vec![order]);
}
