//! Storage implementations for the store traits

pub mod in_memory;

pub use in_memory::{InMemoryDataService, InMemoryLinkService};
