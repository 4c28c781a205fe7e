//! Remote API gateway abstraction.
//!
//! All Eventbrite traffic from the lifecycle manager and the normalizer goes
//! through this trait, so tests can script responses and hosts can swap in
//! their own authenticated transport.

use async_trait::async_trait;
use eventbrite_client::Method;
use serde_json::Value;

use crate::error::GatewayResult;

/// One authenticated call against the Eventbrite API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, e.g. `/webhooks/`.
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
    /// Absolute URL used verbatim instead of `path`.
    pub full_url: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            full_url: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// `GET` against an absolute URL handed to us by Eventbrite.
    pub fn get_url(url: impl Into<String>) -> Self {
        let mut req = Self::new(Method::GET, "");
        req.full_url = Some(url.into());
        req
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The URL or path this request targets, for logs and call records.
    pub fn target(&self) -> &str {
        self.full_url.as_deref().unwrap_or(&self.path)
    }
}

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Issue one request and return the parsed JSON body.
    async fn request(&self, request: ApiRequest) -> GatewayResult<Value>;

    /// Collect every item under `resource` across all pages of a list endpoint.
    async fn request_all_items(
        &self,
        resource: &str,
        method: Method,
        path: &str,
    ) -> GatewayResult<Vec<Value>>;
}

#[async_trait]
impl<G: Gateway + ?Sized> Gateway for std::sync::Arc<G> {
    async fn request(&self, request: ApiRequest) -> GatewayResult<Value> {
        (**self).request(request).await
    }

    async fn request_all_items(
        &self,
        resource: &str,
        method: Method,
        path: &str,
    ) -> GatewayResult<Vec<Value>> {
        (**self).request_all_items(resource, method, path).await
    }
}
