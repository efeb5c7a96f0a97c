//! Table presentation logic.
//!
//! Display hints that do not depend on any UI toolkit: row highlighting,
//! week navigation links and short date labels.

use chrono::NaiveDate;
use shared::{DayRecord, RowHighlight, RowStyle, WeekNavLink};

/// Weeks that get a navigation link: 5th, 10th, ... 35th
const NAV_WEEK_START: u32 = 5;
const NAV_WEEK_END: u32 = 40;
const NAV_WEEK_STEP: usize = 5;

/// English ordinal for a number: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Navigation links for every fifth week of the pregnancy
pub fn week_navigation() -> Vec<WeekNavLink> {
    (NAV_WEEK_START..NAV_WEEK_END)
        .step_by(NAV_WEEK_STEP)
        .map(|week_no| WeekNavLink {
            label: format!("{} Week", ordinal(week_no)),
            anchor: week_anchor(week_no),
        })
        .collect()
}

fn week_anchor(week_no: u32) -> String {
    format!("week-{}", week_no)
}

/// Display hints for one row; today's row wins over the due-date row
pub fn row_style(record: &DayRecord, due_date: Option<NaiveDate>, today: NaiveDate) -> RowStyle {
    let (highlight, nav_anchor) = match record.date {
        Some(date) if date == today => (RowHighlight::Today, "today".to_string()),
        Some(date) if Some(date) == due_date => (RowHighlight::DueDate, "due-date".to_string()),
        _ => (RowHighlight::Normal, week_anchor(record.week_no)),
    };

    RowStyle {
        highlight,
        shaded: record.week_no % 2 == 0,
        nav_anchor,
    }
}

/// Short day label such as "Sat, Sep 9"
pub fn day_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%a, %b %-d").to_string(),
        None => "Invalid DateTime".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::gestation_table::GestationTableService;
    use shared::DueDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordinal() {
        let cases = [
            (1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th"), (10, "10th"),
            (11, "11th"), (12, "12th"), (13, "13th"), (21, "21st"), (22, "22nd"),
            (23, "23rd"), (40, "40th"), (101, "101st"), (111, "111th"), (112, "112th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected);
        }
    }

    #[test]
    fn test_week_navigation() {
        let links = week_navigation();
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["5th Week", "10th Week", "15th Week", "20th Week", "25th Week", "30th Week", "35th Week"]
        );
        assert_eq!(links[0].anchor, "week-5");
        assert_eq!(links[6].anchor, "week-35");
    }

    #[test]
    fn test_row_style() {
        let table = GestationTableService::new().build(&DueDate::new("2024-06-15"), &[]);
        let due = Some(ymd(2024, 6, 15));
        let today = ymd(2024, 1, 10);

        let style = row_style(&table[0], due, today);
        assert_eq!(style.highlight, RowHighlight::Normal);
        assert!(!style.shaded);
        assert_eq!(style.nav_anchor, "week-1");

        let style = row_style(&table[7], due, today);
        assert!(style.shaded);
        assert_eq!(style.nav_anchor, "week-2");

        let style = row_style(&table[280], due, today);
        assert_eq!(style.highlight, RowHighlight::DueDate);
        assert_eq!(style.nav_anchor, "due-date");

        let today_row = table.iter().find(|r| r.date == Some(today)).unwrap();
        let style = row_style(today_row, due, today);
        assert_eq!(style.highlight, RowHighlight::Today);
        assert_eq!(style.nav_anchor, "today");
    }

    #[test]
    fn test_today_wins_over_due_date() {
        let table = GestationTableService::new().build(&DueDate::new("2024-06-15"), &[]);
        let due = ymd(2024, 6, 15);
        let style = row_style(&table[280], Some(due), due);
        assert_eq!(style.highlight, RowHighlight::Today);
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(Some(ymd(2023, 9, 9))), "Sat, Sep 9");
        assert_eq!(day_label(Some(ymd(2024, 6, 15))), "Sat, Jun 15");
        assert_eq!(day_label(None), "Invalid DateTime");
    }
}
