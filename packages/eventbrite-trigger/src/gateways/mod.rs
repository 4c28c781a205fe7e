//! Gateway implementations.

pub mod eventbrite;
