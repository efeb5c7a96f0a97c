use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Local ISO datetime forms accepted after a due date's `T` separator
const ISO_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Due date exactly as the user entered it.
///
/// Acceptance only checks the `YYYY-MM-DD` shape, so the raw text is kept and
/// converted to a calendar date on demand. Text that is not a real ISO date
/// (e.g. "2024-02-30") converts to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(String);

impl DueDate {
    /// Wrap raw text without validating it
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Calendar date for this due date, `None` when the text is not a real date.
    ///
    /// Accepts a bare ISO date or an ISO datetime ("2024-06-15T10:00",
    /// "2024-06-15T10:00:00+02:00"); the date part is used as written.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let raw = self.0.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
            return Some(datetime.date_naive());
        }
        ISO_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|datetime| datetime.date())
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user note attached to one gestational day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayNote {
    /// Gestational day index (0..=286), unique within a saved record
    pub day_gest: u32,
    /// Note text, may contain simple markup
    pub note: String,
}

/// The whole persisted state: due date plus day notes.
///
/// Stored as one JSON blob: `{"dueDate": "YYYY-MM-DD", "notes": [{"dayGest": 0, "note": ""}]}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: Vec<DayNote>,
}

/// Read a JSON `null` list as an empty one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SavedRecord {
    /// True when nothing has been saved yet
    pub fn is_empty(&self) -> bool {
        self.due_date.is_none() && self.notes.is_empty()
    }
}

/// One row of the gestation table, derived from the due date and saved notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Gestational day index, 0..=286
    pub day_gest: u32,
    /// Calendar date of this day; `None` when the due date is not a real date
    pub date: Option<NaiveDate>,
    /// Week number, 1..=41
    pub week_no: u32,
    /// Days since fertilization, absent before gestational day 13
    pub day_fert: Option<u32>,
    /// Age of pregnancy, e.g. "4 weeks, 2 days"
    pub age_preg: String,
    /// Age of conceptus, absent when `day_fert` is absent
    pub age_conc: Option<String>,
    /// Days left until the due date, e.g. "12 days"; absent on and after the due date
    pub countdown: Option<String>,
    /// Saved note, or a milestone note, or nothing
    pub note: Option<String>,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Padding day before the first gestation day of the month
    PaddingBefore,
    /// Day covered by the gestation table
    GestationDay,
    /// Padding day after the last gestation day of the month
    PaddingAfter,
}

/// Represents a single day in the calendar view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_type: CalendarDayType,
    /// Gestation data, only present for `GestationDay`
    pub record: Option<DayRecord>,
}

impl CalendarDay {
    pub fn is_padding(&self) -> bool {
        self.day_type != CalendarDayType::GestationDay
    }
}

/// All days of one calendar month spanned by the gestation table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days: Vec<CalendarDay>,
}

/// Optional parts of the tracker.
///
/// Replaces separate page variants (table only, table with notes, table with
/// calendar) with one configurable builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerFeatures {
    #[serde(default = "default_true")]
    pub with_notes: bool,
    #[serde(default = "default_true")]
    pub with_calendar: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TrackerFeatures {
    fn default() -> Self {
        Self {
            with_notes: true,
            with_calendar: true,
        }
    }
}

/// How a table row should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowHighlight {
    Today,
    DueDate,
    Normal,
}

/// Display hints for one table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowStyle {
    pub highlight: RowHighlight,
    /// Even weeks are shaded
    pub shaded: bool,
    /// Navigation target: "today", "due-date" or "week-N"
    pub nav_anchor: String,
}

/// A "jump to week" navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekNavLink {
    pub label: String,
    pub anchor: String,
}
