//! Calendar domain logic for the pregnancy tracker.
//!
//! Groups gestation table rows into calendar months for a month view. The UI
//! only lays out the cells; all date calculations and padding rules live
//! here.

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::{CalendarDay, CalendarDayType, DayRecord, MonthGroup};

/// Calendar service that handles month grouping and date helpers
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self
    }

    /// Group table rows by calendar month, in the order months first appear.
    ///
    /// The first month is padded before its first gestation day and the last
    /// month is padded after its last gestation day, so every spanned month
    /// holds each of its days exactly once. Rows without a date are skipped.
    pub fn group_by_month(&self, records: &[DayRecord]) -> Vec<MonthGroup> {
        let mut groups: Vec<MonthGroup> = Vec::new();

        for record in records {
            let Some(date) = record.date else {
                continue;
            };

            let starts_new_month = groups
                .last()
                .map_or(true, |g| g.year != date.year() || g.month != date.month());
            if starts_new_month {
                groups.push(self.empty_month_group(date.year(), date.month()));
            }

            if let Some(group) = groups.last_mut() {
                group.days.push(CalendarDay {
                    date,
                    day_type: CalendarDayType::GestationDay,
                    record: Some(record.clone()),
                });
            }
        }

        if let Some(first) = groups.first_mut() {
            self.pad_before(first);
        }
        if let Some(last) = groups.last_mut() {
            self.pad_after(last);
        }

        debug!("Grouped {} rows into {} months", records.len(), groups.len());
        groups
    }

    fn empty_month_group(&self, year: i32, month: u32) -> MonthGroup {
        MonthGroup {
            year,
            month,
            month_name: self.month_name(month).to_string(),
            first_day_of_week: self.first_day_of_month(month, year),
            days: Vec::new(),
        }
    }

    /// Add padding days from the 1st of the month up to the first real day
    fn pad_before(&self, group: &mut MonthGroup) {
        let Some(first_day) = group.days.first().map(|d| d.date.day()) else {
            return;
        };

        let padding: Vec<CalendarDay> = (1..first_day)
            .filter_map(|day| NaiveDate::from_ymd_opt(group.year, group.month, day))
            .map(|date| CalendarDay {
                date,
                day_type: CalendarDayType::PaddingBefore,
                record: None,
            })
            .collect();

        group.days.splice(0..0, padding);
    }

    /// Add padding days after the last real day up to the end of the month
    fn pad_after(&self, group: &mut MonthGroup) {
        let Some(last_day) = group.days.last().map(|d| d.date.day()) else {
            return;
        };
        let days_in_month = self.days_in_month(group.month, group.year);

        let padding = ((last_day + 1)..=days_in_month)
            .filter_map(|day| NaiveDate::from_ymd_opt(group.year, group.month, day))
            .map(|date| CalendarDay {
                date,
                day_type: CalendarDayType::PaddingAfter,
                record: None,
            });

        group.days.extend(padding);
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => if self.is_leap_year(year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => date.weekday().num_days_from_sunday(),
            None => 0,
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }
}
