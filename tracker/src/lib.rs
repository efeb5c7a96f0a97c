//! # Pregnancy Tracker
//!
//! Derives a day-by-day gestation table and month calendar from a due date,
//! and keeps the due date plus per-day notes in local storage.

pub mod backend;
pub mod config;

pub use backend::{Tracker, TrackerState};
pub use config::TrackerConfig;
