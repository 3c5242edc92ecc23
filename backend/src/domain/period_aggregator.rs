//! Week-, month-, quarter- and year-to-date spending totals.
//!
//! Windows are calendar aligned and run from midnight of their first day up
//! to `now`, both ends inclusive. Weeks start on Monday and quarters on
//! January, April, July and October. The windows overlap, so one bill
//! usually counts toward several totals.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use shared::PeriodTotals;

use crate::domain::models::bill::Bill;

/// First day of each window containing a reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindows {
    pub week_start: NaiveDate,
    pub month_start: NaiveDate,
    pub quarter_start: NaiveDate,
    pub year_start: NaiveDate,
    /// Last day counted; bills after it are in the future
    pub end: NaiveDate,
}

impl PeriodWindows {
    pub fn at(now: NaiveDateTime) -> Self {
        let today = now.date();
        let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        let month_start = today - Duration::days(i64::from(today.day0()));
        let year_start = today - Duration::days(i64::from(today.ordinal0()));
        let quarter_month = today.month0() / 3 * 3 + 1;
        let quarter_start =
            NaiveDate::from_ymd_opt(today.year(), quarter_month, 1).unwrap_or(year_start);

        Self {
            week_start,
            month_start,
            quarter_start,
            year_start,
            end: today,
        }
    }
}

/// Sum bill amounts into the four windows ending at `now`.
///
/// A plain date falls at midnight, so a bill dated today counts and one
/// dated tomorrow does not. A timestamp later than `now` is left out even
/// when it is today. Bills whose date cannot be read are left out of every
/// total.
pub fn period_totals(bills: &[Bill], now: NaiveDateTime) -> PeriodTotals {
    let windows = PeriodWindows::at(now);
    let mut totals = PeriodTotals::default();

    for bill in bills {
        let Some(at) = bill.parsed_at() else {
            continue;
        };
        if at > now {
            continue;
        }
        let date = at.date();

        if date >= windows.week_start {
            totals.week_total += bill.amount;
        }
        if date >= windows.month_start {
            totals.month_total += bill.amount;
        }
        if date >= windows.quarter_start {
            totals.quarter_total += bill.amount;
        }
        if date >= windows.year_start {
            totals.year_total += bill.amount;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn bill(date: &str, amount: f64) -> Bill {
        Bill {
            id: Bill::generate_id(),
            bill_name: "Bill".to_string(),
            amount,
            date: date.to_string(),
            status: None,
            payer: None,
            description: None,
        }
    }

    #[test]
    fn test_windows_mid_year() {
        // Saturday
        let windows = PeriodWindows::at(at(2024, 6, 15, 9));

        assert_eq!(windows.week_start, date(2024, 6, 10));
        assert_eq!(windows.month_start, date(2024, 6, 1));
        assert_eq!(windows.quarter_start, date(2024, 4, 1));
        assert_eq!(windows.year_start, date(2024, 1, 1));
        assert_eq!(windows.end, date(2024, 6, 15));
    }

    #[test]
    fn test_week_starts_today_on_monday() {
        let windows = PeriodWindows::at(at(2024, 6, 10, 0));
        assert_eq!(windows.week_start, date(2024, 6, 10));
    }

    #[test]
    fn test_week_can_start_in_previous_year() {
        // Wednesday 2025-01-01
        let windows = PeriodWindows::at(at(2025, 1, 1, 12));

        assert_eq!(windows.week_start, date(2024, 12, 30));
        assert_eq!(windows.quarter_start, date(2025, 1, 1));
        assert_eq!(windows.year_start, date(2025, 1, 1));
    }

    #[test]
    fn test_quarter_starts() {
        for (month, expected) in [(1, 1), (3, 1), (4, 4), (6, 4), (7, 7), (9, 7), (10, 10), (12, 10)] {
            let windows = PeriodWindows::at(at(2023, month, 20, 8));
            assert_eq!(windows.quarter_start, date(2023, expected, 1), "month {}", month);
        }
    }

    #[test]
    fn test_mixed_bills_by_period() {
        let bills = vec![
            bill("2024-01-01", 10.0),
            bill("2024-03-15", 20.0),
            bill("2024-06-01", 30.0),
            bill("2023-12-31", 40.0),
        ];

        let totals = period_totals(&bills, at(2024, 6, 15, 9));

        assert_eq!(totals.week_total, 0.0);
        assert_eq!(totals.month_total, 30.0);
        assert_eq!(totals.quarter_total, 30.0);
        assert_eq!(totals.year_total, 60.0);
    }

    #[test]
    fn test_bill_dated_today_counts_everywhere_and_tomorrow_nowhere() {
        let now = at(2024, 6, 15, 0);
        let today = period_totals(&[bill("2024-06-15", 5.0)], now);
        assert_eq!(
            today,
            PeriodTotals {
                week_total: 5.0,
                month_total: 5.0,
                quarter_total: 5.0,
                year_total: 5.0,
            }
        );

        let tomorrow = period_totals(&[bill("2024-06-16", 5.0)], now);
        assert_eq!(tomorrow, PeriodTotals::default());
    }

    #[test]
    fn test_timestamp_later_today_is_excluded() {
        let now = at(2024, 6, 15, 12);
        let stamp = |hour| {
            at(2024, 6, 15, hour)
                .and_local_timezone(chrono::Local)
                .earliest()
                .unwrap()
                .to_rfc3339()
        };
        let bills = vec![bill(&stamp(9), 1.0), bill(&stamp(18), 2.0)];

        let totals = period_totals(&bills, now);

        assert_eq!(totals.week_total, 1.0);
        assert_eq!(totals.year_total, 1.0);
    }

    #[test]
    fn test_window_start_is_inclusive() {
        let now = at(2024, 8, 14, 18);
        let bills = vec![
            bill("2024-08-12", 1.0), // Monday
            bill("2024-08-11", 2.0), // Sunday before
            bill("2024-07-01", 4.0), // quarter start
            bill("2024-06-30", 8.0),
        ];

        let totals = period_totals(&bills, now);

        assert_eq!(totals.week_total, 1.0);
        assert_eq!(totals.month_total, 3.0);
        assert_eq!(totals.quarter_total, 7.0);
        assert_eq!(totals.year_total, 15.0);
    }

    #[test]
    fn test_unreadable_dates_are_skipped() {
        let bills = vec![
            bill("someday", 100.0),
            bill("", 100.0),
            bill("2024-13-01", 100.0),
            bill("2024-06-14", 1.5),
        ];

        let totals = period_totals(&bills, at(2024, 6, 15, 9));

        assert_eq!(totals.week_total, 1.5);
        assert_eq!(totals.year_total, 1.5);
    }

    #[test]
    fn test_no_bills() {
        assert_eq!(period_totals(&[], at(2024, 6, 15, 9)), PeriodTotals::default());
    }
}
