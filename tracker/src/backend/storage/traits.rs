//! # Storage Traits
//!
//! Abstractions that let the saved record be kept in different backends
//! without the domain layer knowing about them.

use anyhow::Result;
use shared::SavedRecord;

/// Flat string key-value store with local-storage semantics
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` if the key is missing
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key` in one step
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Operations on the persisted due date and day notes
pub trait SavedRecordStorage {
    /// Load the saved record, falling back to an empty one
    fn load(&self) -> SavedRecord;

    /// Validate and store the due date, keeping existing notes
    fn save_due_date(&self, due_date: &str) -> Result<()>;

    /// Insert or update the note for a gestational day; `None` is ignored
    fn save_note(&self, day_gest: Option<u32>, note: &str) -> Result<()>;

    /// Remove the whole saved record
    fn reset(&self) -> Result<()>;
}
