//! Reporting calendar.
//!
//! All records store instants as UTC timestamps, but due dates and
//! monthly buckets are calendar concepts: they depend on the timezone
//! the user keeps their books in. [`ReportingCalendar`] owns that
//! conversion so no other module touches raw offsets.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Converts UTC instants into calendar dates in the reporting timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingCalendar {
    tz: Tz,
}

impl ReportingCalendar {
    /// Creates a calendar for the given reporting timezone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Creates a UTC calendar. Useful as a neutral default in tests.
    #[must_use]
    pub const fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    /// The timezone this calendar reports in.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// The current calendar date in the reporting timezone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.local_date(Utc::now())
    }

    /// The calendar date a UTC instant falls on in the reporting timezone.
    ///
    /// An instant late on the last day of a month in UTC can land on the
    /// previous day locally, which moves the record into the earlier
    /// monthly bucket.
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// The first and last calendar day of the given month.
    ///
    /// Returns `None` when the month is not 1..=12 or the year is out of
    /// the representable range.
    #[must_use]
    pub fn month_window(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1)?, 1)
        } else {
            (year, month + 1)
        };
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
        Some((first, last))
    }
}
