//! Static data store implementations.
//!
//! Available backends:
//! - `MemoryStore` - In-memory storage (tests, ephemeral hosts)
//! - `JsonFileStore` - One JSON file per node instance

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
