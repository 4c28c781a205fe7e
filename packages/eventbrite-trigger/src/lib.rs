//! Eventbrite webhook trigger.
//!
//! Registers an Eventbrite webhook subscription for a workflow node, keeps it
//! alive across runs, tears it down on deactivation, and turns inbound
//! callbacks into workflow records.
//!
//! # Usage
//!
//! ```rust,ignore
//! use eventbrite_client::EventbriteClient;
//! use eventbrite_trigger::{JsonFileStore, SubscriptionManager, TriggerConfig, WebhookNormalizer};
//!
//! let client = EventbriteClient::new(std::env::var("EVENTBRITE_API_TOKEN")?);
//! let config = TriggerConfig::new("https://hooks.example.com/webhook", "1234567890")
//!     .with_actions(["order.placed", "attendee.checked_in"]);
//!
//! let manager = SubscriptionManager::new(client.clone(), JsonFileStore::new("state.json"), config);
//! manager.activate().await?;
//!
//! let normalizer = WebhookNormalizer::new(client);
//! let records = normalizer.handle(body, true).await?;
//! ```
//!
//! # Modules
//!
//! - [`lifecycle`] - Subscription exists/create/delete
//! - [`normalizer`] - Inbound callback validation and resolution
//! - [`traits`] - Gateway and store interfaces
//! - [`stores`] - Store implementations (MemoryStore, JsonFileStore)
//! - [`gateways`] - Gateway backed by `eventbrite-client`
//! - [`testing`] - Scripted gateway for tests

pub mod error;
pub mod gateways;
pub mod lifecycle;
pub mod normalizer;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

pub use error::{GatewayError, Result, StoreError, TriggerError};
pub use lifecycle::{Activation, SubscriptionManager};
pub use normalizer::WebhookNormalizer;
pub use stores::{JsonFileStore, MemoryStore};
pub use traits::{
    gateway::{ApiRequest, Gateway},
    store::{StaticDataStore, WEBHOOK_ID_KEY},
};
pub use types::{
    action::{is_known_action, parse_action_list, ACTIONS},
    config::TriggerConfig,
    notification::{InboundNotification, TEST_API_URL_MARKER, TEST_PLACEHOLDER_MESSAGE},
};
