//! Collaborator interfaces injected into the lifecycle manager and normalizer.

pub mod gateway;
pub mod store;
