//! # Local Storage Module
//!
//! Key-value storage for the tracker, modelled on browser local storage.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── tracker_config.yaml      ← optional settings (see `config`)
//! └── pregnancy-tracker.json   ← the saved record, one JSON blob
//! ```
//!
//! ## JSON Format
//!
//! ```json
//! {"dueDate":"2024-06-15","notes":[{"dayGest":42,"note":"First scan"}]}
//! ```

pub mod connection;
pub mod memory;
pub mod saved_record_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::FileConnection;
pub use memory::MemoryStorage;
pub use saved_record_repository::{SavedRecordRepository, STORAGE_KEY};
