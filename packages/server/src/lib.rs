// Eventbrite Trigger - webhook receiver
//
// Keeps an Eventbrite webhook subscription registered while the process runs
// and turns inbound callbacks into newline-delimited workflow records.

pub mod config;
pub mod server;
pub mod sink;

pub use config::*;
