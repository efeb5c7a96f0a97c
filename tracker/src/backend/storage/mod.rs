//! # Storage Module
//!
//! Handles persistence of the tracker's single saved record.
//!
//! The record lives under one fixed key in a key-value store, mirroring
//! browser local storage. The store itself is behind the [`KeyValueStorage`]
//! trait so the domain layer never touches files directly.
//!
//! ## Implementations
//!
//! - **FileConnection**: one JSON file per key in the data directory, written atomically
//! - **MemoryStorage**: in-process map, used by tests and embedders

pub mod traits;
pub mod local;

pub use traits::{KeyValueStorage, SavedRecordStorage};
pub use local::{FileConnection, MemoryStorage, SavedRecordRepository, STORAGE_KEY};
