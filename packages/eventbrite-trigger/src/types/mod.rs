//! Configuration, action table, and payload types.

pub mod action;
pub mod config;
pub mod notification;
