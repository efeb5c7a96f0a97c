//! # Backend Module
//!
//! Ties the domain services to storage behind one controller, [`Tracker`].
//! The controller owns the current view state explicitly and exposes one
//! method per user action:
//!
//! - `on_submit_due_date`: validate, save, rebuild the table
//! - `on_edit_note`: upsert the note for a row, rebuild the table
//! - `on_reset`: forget everything
//!
//! All operations are synchronous; there is no background work.

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use shared::{DayRecord, DueDate, MonthGroup, RowStyle, SavedRecord, TrackerFeatures, WeekNavLink};

pub mod domain;
pub mod storage;

use crate::config::TrackerConfig;
use domain::table_presentation;
use domain::{CalendarService, GestationTableService, TrackerCommand};
use storage::{FileConnection, KeyValueStorage, SavedRecordRepository, SavedRecordStorage};

/// Everything a renderer needs, derived from the saved record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub due_date: Option<DueDate>,
    /// Gestation table rows, empty until a due date is set
    pub table: Vec<DayRecord>,
    /// Month view, `None` when the calendar feature is off or no due date is set
    pub calendar: Option<Vec<MonthGroup>>,
}

impl TrackerState {
    pub fn is_empty(&self) -> bool {
        self.due_date.is_none()
    }
}

/// Controller that owns the saved record and the derived view
pub struct Tracker<S: KeyValueStorage> {
    repository: SavedRecordRepository<S>,
    table_service: GestationTableService,
    calendar_service: CalendarService,
    state: TrackerState,
}

impl Tracker<FileConnection> {
    /// Open the tracker in the configured data directory
    pub fn from_config(config: &TrackerConfig) -> Result<Self> {
        let connection = FileConnection::new(&config.data_directory)?;
        Ok(Self::open(connection, config.features))
    }
}

impl<S: KeyValueStorage> Tracker<S> {
    /// Open the tracker on a storage backend and restore the saved view
    pub fn open(storage: S, features: TrackerFeatures) -> Self {
        let mut tracker = Self {
            repository: SavedRecordRepository::new(storage),
            table_service: GestationTableService::with_features(features),
            calendar_service: CalendarService::new(),
            state: TrackerState::default(),
        };
        tracker.refresh();
        tracker
    }

    /// Current view state
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn features(&self) -> TrackerFeatures {
        self.table_service.features()
    }

    /// The persisted record as currently stored
    pub fn saved_record(&self) -> SavedRecord {
        self.repository.load()
    }

    /// Save a new due date and rebuild the view.
    ///
    /// An invalid due date is rejected; storage and the current view stay as they were.
    pub fn on_submit_due_date(&mut self, value: &str) -> Result<&TrackerState> {
        self.repository.save_due_date(value)?;
        self.refresh();
        Ok(&self.state)
    }

    /// Save the note for a row and rebuild the view
    pub fn on_edit_note(&mut self, day_gest: Option<u32>, text: &str) -> Result<()> {
        if !self.features().with_notes {
            warn!("Notes are disabled, ignoring edit for day {:?}", day_gest);
            return Ok(());
        }

        self.repository.save_note(day_gest, text)?;
        self.refresh();
        Ok(())
    }

    /// Delete the saved record and clear the view
    pub fn on_reset(&mut self) -> Result<()> {
        self.repository.reset()?;
        self.state = TrackerState::default();
        info!("Tracker reset");
        Ok(())
    }

    /// Apply a user action
    pub fn dispatch(&mut self, command: TrackerCommand) -> Result<()> {
        match command {
            TrackerCommand::SubmitDueDate(cmd) => self.on_submit_due_date(&cmd.value).map(|_| ()),
            TrackerCommand::EditNote(cmd) => self.on_edit_note(cmd.day_gest, &cmd.text),
            TrackerCommand::Reset => self.on_reset(),
        }
    }

    /// Display hints for every table row
    pub fn row_styles(&self, today: NaiveDate) -> Vec<RowStyle> {
        let due = self.state.due_date.as_ref().and_then(DueDate::to_naive_date);
        self.state
            .table
            .iter()
            .map(|record| table_presentation::row_style(record, due, today))
            .collect()
    }

    /// "Jump to week" links
    pub fn week_navigation(&self) -> Vec<WeekNavLink> {
        table_presentation::week_navigation()
    }

    /// Rebuild the view from what is stored
    fn refresh(&mut self) {
        let record = self.repository.load();

        let Some(due_date) = record.due_date else {
            self.state = TrackerState::default();
            return;
        };

        let table = self.table_service.build(&due_date, &record.notes);
        let calendar = self
            .features()
            .with_calendar
            .then(|| self.calendar_service.group_by_month(&table));

        info!("Built gestation table for due date {}", due_date);
        self.state = TrackerState {
            due_date: Some(due_date),
            table,
            calendar,
        };
    }
}
