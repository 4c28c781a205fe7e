//! Testing utilities including a scripted gateway.
//!
//! Useful for testing hosts of the trigger without talking to Eventbrite.

use async_trait::async_trait;
use eventbrite_client::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{GatewayError, GatewayResult};
use crate::traits::gateway::{ApiRequest, Gateway};

/// Record of a call made to the mock gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum MockGatewayCall {
    Request(ApiRequest),
    RequestAllItems {
        resource: String,
        method: Method,
        path: String,
    },
}

/// A gateway that answers from scripted responses and records every call.
///
/// Responses are keyed by method and target (path, or absolute URL for
/// requests built with [`ApiRequest::get_url`]). Unscripted requests fail
/// with [`GatewayError::Transport`]. Clones share scripts and call history.
#[derive(Clone, Default)]
pub struct MockGateway {
    responses: Arc<Mutex<HashMap<(Method, String), GatewayResult<Value>>>>,
    items: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    calls: Arc<Mutex<Vec<MockGatewayCall>>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method target` with a JSON body.
    pub fn with_response(self, method: Method, target: impl Into<String>, body: Value) -> Self {
        lock(&self.responses).insert((method, target.into()), Ok(body));
        self
    }

    /// Fail `method target` with the given error.
    pub fn with_error(self, method: Method, target: impl Into<String>, error: GatewayError) -> Self {
        lock(&self.responses).insert((method, target.into()), Err(error));
        self
    }

    /// Items returned by `request_all_items` for a resource key.
    pub fn with_items(self, resource: impl Into<String>, items: Vec<Value>) -> Self {
        lock(&self.items).insert(resource.into(), items);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockGatewayCall> {
        lock(&self.calls).clone()
    }

    /// Only the single-request calls, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.calls)
            .iter()
            .filter_map(|c| match c {
                MockGatewayCall::Request(req) => Some(req.clone()),
                MockGatewayCall::RequestAllItems { .. } => None,
            })
            .collect()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn request(&self, request: ApiRequest) -> GatewayResult<Value> {
        let key = (request.method.clone(), request.target().to_string());
        lock(&self.calls).push(MockGatewayCall::Request(request));

        match lock(&self.responses).get(&key) {
            Some(scripted) => scripted.clone(),
            None => Err(GatewayError::Transport(format!(
                "no scripted response for {} {}",
                key.0, key.1
            ))),
        }
    }

    async fn request_all_items(
        &self,
        resource: &str,
        method: Method,
        path: &str,
    ) -> GatewayResult<Vec<Value>> {
        lock(&self.calls).push(MockGatewayCall::RequestAllItems {
            resource: resource.to_string(),
            method,
            path: path.to_string(),
        });
        Ok(lock(&self.items).get(resource).cloned().unwrap_or_default())
    }
}
