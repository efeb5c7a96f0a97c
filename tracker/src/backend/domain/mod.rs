//! # Domain Module
//!
//! Contains all business logic for the pregnancy tracker.
//!
//! Everything here is a pure transformation of the due date and the saved
//! notes; no module in this layer touches storage or any UI framework.
//!
//! ## Module Organization
//!
//! - **due_date**: due-date shape validation
//! - **gestation_table**: derivation of the 287-row gestation table
//! - **calendar**: grouping of table rows into padded calendar months
//! - **table_presentation**: row highlighting, week navigation, date labels
//! - **commands**: the user actions the controller accepts
//!
//! ## Business Rules
//!
//! - A due date is accepted when it contains a `YYYY-MM-DD` shaped substring
//! - Gestational day 0 is 280 days before the due date; the table runs one week past it
//! - Fertilization is modelled on gestational day 13
//! - Saved notes win over the trimester milestone notes

pub mod due_date;
pub mod gestation_table;
pub mod calendar;
pub mod table_presentation;
pub mod commands;

pub use due_date::{parse_due_date, ValidationError};
pub use gestation_table::*;
pub use calendar::*;
pub use commands::*;
