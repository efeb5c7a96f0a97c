//! Gestation table domain logic.
//!
//! Derives the day-by-day table of a pregnancy from its due date: 40 weeks
//! of gestation plus one extra week, 287 rows in total. Every row is a pure
//! projection of the due date and the saved notes, so the table is rebuilt
//! whenever either changes and is never stored.
//!
//! ## Row contents
//!
//! - **date**: due date minus the days remaining
//! - **week_no**: 1-based week of gestation
//! - **day_fert**: days since fertilization, modelled on gestational day 13
//! - **age_preg / age_conc**: "W weeks, D days" strings
//! - **countdown**: days until the due date, absent from the due date on
//! - **note**: saved note, else a trimester milestone, else nothing

use chrono::Duration;
use log::debug;
use shared::{DayNote, DayRecord, DueDate, TrackerFeatures};

/// Length of a pregnancy in days, from gestational day 0 to the due date
pub const GESTATION_DAYS: u32 = 280;

/// Weeks covered by the table: 40 weeks of gestation plus one extra week
pub const TABLE_WEEKS: u32 = 41;

/// Number of rows in the table
pub const TABLE_DAYS: u32 = TABLE_WEEKS * 7;

/// Gestational day on which fertilization is modelled to happen
pub const FERTILIZATION_DAY: u32 = 13;

/// Automatic notes for days without a saved note: (week, day of week, text)
const MILESTONES: [(u32, u32, &str); 2] = [
    (13, 0, "2nd Trimester Begins"),
    (28, 0, "3rd Trimester Begins"),
];

/// Gestation table service that derives table rows from a due date
#[derive(Debug, Clone)]
pub struct GestationTableService {
    features: TrackerFeatures,
}

impl GestationTableService {
    /// Create a new service with every feature enabled
    pub fn new() -> Self {
        Self {
            features: TrackerFeatures::default(),
        }
    }

    /// Create a new service with a custom feature set
    pub fn with_features(features: TrackerFeatures) -> Self {
        Self { features }
    }

    pub fn features(&self) -> TrackerFeatures {
        self.features
    }

    /// Build all 287 rows of the table, ordered by gestational day.
    ///
    /// A due date that is not a real calendar date still produces every row,
    /// with `date` left empty.
    pub fn build(&self, due_date: &DueDate, notes: &[DayNote]) -> Vec<DayRecord> {
        let due = due_date.to_naive_date();
        if due.is_none() {
            debug!("Due date '{}' is not a calendar date, rows will have no dates", due_date);
        }

        (0..TABLE_DAYS)
            .map(|day_gest| {
                // Countdown to due date, negative in the extra week
                let countdown_days = i64::from(GESTATION_DAYS) - i64::from(day_gest);
                let date = due.and_then(|d| d.checked_sub_signed(Duration::days(countdown_days)));

                let day_fert = day_gest.checked_sub(FERTILIZATION_DAY);

                let note = if self.features.with_notes {
                    self.resolve_note(day_gest, notes)
                } else {
                    None
                };

                DayRecord {
                    day_gest,
                    date,
                    week_no: self.week_number(day_gest),
                    day_fert,
                    age_preg: self.format_age(day_gest),
                    age_conc: day_fert.map(|days| self.format_age(days)),
                    countdown: self.format_countdown(countdown_days),
                    note,
                }
            })
            .collect()
    }

    /// 1-based week number for a gestational day
    pub fn week_number(&self, day_gest: u32) -> u32 {
        day_gest / 7 + 1
    }

    /// Format a day count as "W weeks, D days"
    pub fn format_age(&self, days: u32) -> String {
        let weeks = days / 7;
        let days = days % 7;
        format!("{}, {}", pluralize(weeks, "week"), pluralize(days, "day"))
    }

    /// Format the days left until the due date, `None` once it is reached
    pub fn format_countdown(&self, countdown_days: i64) -> Option<String> {
        if countdown_days < 1 {
            return None;
        }
        Some(if countdown_days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", countdown_days)
        })
    }

    /// Saved note for the day, falling back to a milestone note
    pub fn resolve_note(&self, day_gest: u32, notes: &[DayNote]) -> Option<String> {
        let saved = notes
            .iter()
            .find(|n| n.day_gest == day_gest)
            .filter(|n| !n.note.is_empty());

        match saved {
            Some(n) => Some(n.note.clone()),
            None => self.milestone_note(day_gest).map(str::to_string),
        }
    }

    /// Milestone text for trimester boundaries
    pub fn milestone_note(&self, day_gest: u32) -> Option<&'static str> {
        let (weeks, days) = (day_gest / 7, day_gest % 7);
        MILESTONES
            .iter()
            .find(|(w, d, _)| *w == weeks && *d == days)
            .map(|(_, _, text)| *text)
    }
}

impl Default for GestationTableService {
    fn default() -> Self {
        Self::new()
    }
}

fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn due(s: &str) -> DueDate {
        DueDate::new(s)
    }

    fn note(day_gest: u32, text: &str) -> DayNote {
        DayNote {
            day_gest,
            note: text.to_string(),
        }
    }

    #[test]
    fn test_build_produces_287_ordered_rows() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-06-15"), &[]);

        assert_eq!(table.len(), 287);
        for (i, record) in table.iter().enumerate() {
            assert_eq!(record.day_gest, i as u32);
        }
    }

    #[test]
    fn test_first_row_example() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-06-15"), &[]);
        let first = &table[0];

        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 9, 9));
        assert_eq!(first.week_no, 1);
        assert_eq!(first.age_preg, "0 weeks, 0 days");
        assert_eq!(first.day_fert, None);
        assert_eq!(first.age_conc, None);
        assert_eq!(first.countdown.as_deref(), Some("280 days"));
        assert_eq!(first.note, None);
    }

    #[test]
    fn test_datetime_due_date_uses_its_date() {
        let service = GestationTableService::new();
        for raw in ["2024-06-15T10:00", "2024-06-15T08:30:00Z"] {
            let table = service.build(&due(raw), &[]);
            assert_eq!(table[0].date, NaiveDate::from_ymd_opt(2023, 9, 9), "{raw}");
            assert_eq!(table[280].date, NaiveDate::from_ymd_opt(2024, 6, 15), "{raw}");
        }
    }

    #[test]
    fn test_due_date_row_and_extra_week() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-06-15"), &[]);

        let due_row = &table[280];
        assert_eq!(due_row.date, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(due_row.week_no, 41);
        assert_eq!(due_row.countdown, None);
        assert_eq!(due_row.age_preg, "40 weeks, 0 days");

        let last = &table[286];
        assert_eq!(last.date, NaiveDate::from_ymd_opt(2024, 6, 21));
        assert_eq!(last.week_no, 41);
        assert_eq!(last.countdown, None);
    }

    #[test]
    fn test_countdown_absent_iff_due_date_reached() {
        let service = GestationTableService::new();
        for record in service.build(&due("2024-06-15"), &[]) {
            assert_eq!(record.countdown.is_none(), record.day_gest >= 280, "day {}", record.day_gest);
        }
    }

    #[test]
    fn test_countdown_singular() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-06-15"), &[]);
        assert_eq!(table[279].countdown.as_deref(), Some("1 day"));
        assert_eq!(table[278].countdown.as_deref(), Some("2 days"));
    }

    #[test]
    fn test_fertilization_day_rule() {
        let service = GestationTableService::new();
        for record in service.build(&due("2024-06-15"), &[]) {
            if record.day_gest < 13 {
                assert_eq!(record.day_fert, None);
                assert_eq!(record.age_conc, None);
            } else {
                assert_eq!(record.day_fert, Some(record.day_gest - 13));
                assert!(record.age_conc.is_some());
            }
        }
    }

    #[test]
    fn test_age_strings() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-06-15"), &[]);

        assert_eq!(table[1].age_preg, "0 weeks, 1 day");
        assert_eq!(table[8].age_preg, "1 week, 1 day");
        assert_eq!(table[16].age_preg, "2 weeks, 2 days");
        assert_eq!(table[13].age_conc.as_deref(), Some("0 weeks, 0 days"));
        assert_eq!(table[21].age_conc.as_deref(), Some("1 week, 1 day"));
    }

    #[test]
    fn test_week_numbers() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-06-15"), &[]);
        assert_eq!(table[6].week_no, 1);
        assert_eq!(table[7].week_no, 2);
        assert_eq!(table[286].week_no, 41);
    }

    #[test]
    fn test_dates_are_consecutive() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-03-01"), &[]);
        for pair in table.windows(2) {
            let (a, b) = (pair[0].date.unwrap(), pair[1].date.unwrap());
            assert_eq!(b - a, Duration::days(1));
        }
    }

    #[test]
    fn test_milestone_defaults() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-06-15"), &[]);

        assert_eq!(table[91].note.as_deref(), Some("2nd Trimester Begins"));
        assert_eq!(table[196].note.as_deref(), Some("3rd Trimester Begins"));

        let with_notes = table.iter().filter(|r| r.note.is_some()).count();
        assert_eq!(with_notes, 2);
    }

    #[test]
    fn test_saved_notes_override_milestones() {
        let service = GestationTableService::new();
        let notes = vec![note(91, "Told the family"), note(196, "Glucose test"), note(42, "Scan")];
        let table = service.build(&due("2024-06-15"), &notes);

        assert_eq!(table[91].note.as_deref(), Some("Told the family"));
        assert_eq!(table[196].note.as_deref(), Some("Glucose test"));
        assert_eq!(table[42].note.as_deref(), Some("Scan"));
    }

    #[test]
    fn test_empty_saved_note_falls_back_to_milestone() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-06-15"), &[note(91, ""), note(5, "")]);

        assert_eq!(table[91].note.as_deref(), Some("2nd Trimester Begins"));
        assert_eq!(table[5].note, None);
    }

    #[test]
    fn test_notes_disabled() {
        let service = GestationTableService::with_features(TrackerFeatures {
            with_notes: false,
            with_calendar: true,
        });
        let table = service.build(&due("2024-06-15"), &[note(42, "Scan")]);
        assert!(table.iter().all(|r| r.note.is_none()));
    }

    #[test]
    fn test_invalid_calendar_date_propagates() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-02-30"), &[]);

        assert_eq!(table.len(), 287);
        assert!(table.iter().all(|r| r.date.is_none()));
        assert_eq!(table[0].countdown.as_deref(), Some("280 days"));
        assert_eq!(table[91].note.as_deref(), Some("2nd Trimester Begins"));
    }

    #[test]
    fn test_leap_year_arithmetic() {
        let service = GestationTableService::new();
        let table = service.build(&due("2024-12-05"), &[]);
        assert_eq!(table[0].date, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(table[1].date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }
}
