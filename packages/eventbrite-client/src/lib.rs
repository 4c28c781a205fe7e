//! Pure Eventbrite REST API client.
//!
//! A minimal, bearer-authenticated client for the Eventbrite v3 API. It knows
//! how to issue a single request against a path or an absolute URL, and how to
//! walk Eventbrite's continuation-based pagination.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventbrite_client::{EventbriteClient, Method};
//!
//! let client = EventbriteClient::new(std::env::var("EVENTBRITE_API_TOKEN")?);
//!
//! let webhook = client.request(Method::GET, "/webhooks/123/", None, &[], None).await?;
//! let orgs = client
//!     .request_all_items("organizations", Method::GET, "/users/me/organizations", None, &[])
//!     .await?;
//! ```

pub mod credentials;
pub mod error;
pub mod types;

pub use credentials::ApiToken;
pub use error::{EventbriteError, Result};
pub use reqwest::Method;
pub use types::{CreateWebhookRequest, Pagination};

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;
use types::ApiErrorBody;

const BASE_URL: &str = "https://www.eventbriteapi.com/v3";

/// Upper bound on pages fetched by `request_all_items`.
const MAX_PAGES: usize = 1000;

#[derive(Clone)]
pub struct EventbriteClient {
    client: reqwest::Client,
    token: ApiToken,
    base_url: String,
}

impl EventbriteClient {
    pub fn new(token: impl Into<ApiToken>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (sandboxes, proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Issue one authenticated request.
    ///
    /// `full_url`, when given, is used verbatim instead of `base_url + path`.
    /// Empty response bodies come back as `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(String, String)],
        full_url: Option<&str>,
    ) -> Result<Value> {
        let url = match full_url {
            Some(url) => url.to_string(),
            None => format!("{}{}", self.base_url, path),
        };
        debug!(method = %method, url = %url, "Eventbrite request");

        let mut builder = self
            .client
            .request(method, &url)
            .bearer_auth(self.token.expose());
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body.filter(|b| !is_empty_body(b)) {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(EventbriteError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Collect every item under `property` across all pages of a list endpoint.
    ///
    /// Fails with `Parse` if the API hands back a continuation token it
    /// already returned, or if more than `MAX_PAGES` pages are announced.
    pub async fn request_all_items(
        &self,
        property: &str,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(String, String)],
    ) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut query = query.to_vec();
        let mut seen = HashSet::new();

        for _ in 0..MAX_PAGES {
            let resp = self.request(method.clone(), path, body, &query, None).await?;

            if let Some(page) = resp.get(property).and_then(Value::as_array) {
                items.extend(page.iter().cloned());
            }

            let pagination: Pagination = match resp.get("pagination") {
                Some(p) => serde_json::from_value(p.clone())?,
                None => return Ok(items),
            };
            if !pagination.has_more_items {
                return Ok(items);
            }
            let Some(continuation) = pagination.continuation else {
                return Ok(items);
            };
            if !seen.insert(continuation.clone()) {
                return Err(EventbriteError::Parse(format!(
                    "pagination repeated continuation token {continuation:?}"
                )));
            }

            debug!(property, continuation = %continuation, "Fetching next page");
            query.retain(|(k, _)| k != "continuation");
            query.push(("continuation".to_string(), continuation));
        }

        Err(EventbriteError::Parse(format!(
            "pagination did not finish within {MAX_PAGES} pages"
        )))
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Prefer Eventbrite's `error_description`, fall back to the raw body.
fn error_message(text: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(text) {
        Ok(ApiErrorBody {
            error_description: Some(description),
            ..
        }) => description,
        Ok(ApiErrorBody {
            error: Some(error), ..
        }) => error,
        _ => text.to_string(),
    }
}
