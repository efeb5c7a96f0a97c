//! # Saved Record Repository
//!
//! Keeps the due date and all day notes as one JSON blob under a single
//! fixed key. Every write replaces the whole blob; the "one note per
//! gestational day" rule is enforced here by upserting in `save_note`.
//!
//! Reads never fail: a missing, empty or unparseable blob loads as an empty
//! record.

use anyhow::Result;
use log::{debug, info, warn};
use shared::{DayNote, SavedRecord};

use crate::backend::domain::due_date::parse_due_date;
use crate::backend::storage::traits::{KeyValueStorage, SavedRecordStorage};

/// Key the saved record is stored under
pub const STORAGE_KEY: &str = "pregnancy-tracker";

/// Repository for the tracker's saved record on top of any key-value storage
#[derive(Debug, Clone)]
pub struct SavedRecordRepository<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SavedRecordRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Parse a stored blob, treating anything unusable as an empty record
    fn decode(raw: &str) -> SavedRecord {
        if raw.trim().is_empty() || raw.trim() == "null" {
            return SavedRecord::default();
        }

        match serde_json::from_str::<SavedRecord>(raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Stored record is unreadable, starting from an empty record: {}", e);
                SavedRecord::default()
            }
        }
    }

    /// Serialize and store the whole record
    fn write(&self, record: &SavedRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.storage.set_item(STORAGE_KEY, &json)?;
        debug!("Saved record with {} notes", record.notes.len());
        Ok(())
    }
}

impl<S: KeyValueStorage> SavedRecordStorage for SavedRecordRepository<S> {
    fn load(&self) -> SavedRecord {
        match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => Self::decode(&raw),
            Ok(None) => SavedRecord::default(),
            Err(e) => {
                warn!("Failed to read stored record, starting from an empty record: {}", e);
                SavedRecord::default()
            }
        }
    }

    fn save_due_date(&self, due_date: &str) -> Result<()> {
        let due_date = parse_due_date(due_date)?;

        info!("Saving due date {}", due_date);

        let mut record = self.load();
        record.due_date = Some(due_date);
        self.write(&record)
    }

    fn save_note(&self, day_gest: Option<u32>, note: &str) -> Result<()> {
        let Some(day_gest) = day_gest else {
            return Ok(());
        };

        let mut record = self.load();
        match record.notes.iter_mut().find(|n| n.day_gest == day_gest) {
            Some(existing) => existing.note = note.to_string(),
            None => record.notes.push(DayNote {
                day_gest,
                note: note.to_string(),
            }),
        }
        self.write(&record)?;

        info!("Saved note for gestational day {}", day_gest);
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        self.storage.remove_item(STORAGE_KEY)?;
        info!("Cleared saved record");
        Ok(())
    }
}
