use chrono::{Datelike, Local, Months, NaiveDate, Weekday};

use crate::consts::{DAYS_PER_WEEK, MONTHS_PER_YEAR};

/// Calendar queries the grid math depends on.
///
/// Hosts hand an implementation in explicitly instead of the grid reaching
/// for a shared platform calendar, so locale (first weekday) and "today" are
/// ordinary values that tests can pin.
pub trait CalendarSystem {
    /// Normalizes a date to the first day of its month.
    fn start_of_month(&self, date: NaiveDate) -> NaiveDate;

    /// Adds whole months, `None` on overflow past the calendar's limits.
    fn add_months(&self, date: NaiveDate, months: u32) -> Option<NaiveDate>;

    /// Whole-month difference between the months containing `from` and `to`,
    /// negative when `to` is in an earlier month.
    fn months_between(&self, from: NaiveDate, to: NaiveDate) -> i32;

    /// Number of days in the month containing `date`.
    fn days_in_month(&self, date: NaiveDate) -> u32;

    /// Weekday of `date`.
    fn weekday(&self, date: NaiveDate) -> Weekday;

    /// The weekday the locale starts each week row with.
    fn first_weekday(&self) -> Weekday;

    /// The current day.
    fn today(&self) -> NaiveDate;

    /// Column of `date`'s weekday relative to the locale first weekday,
    /// in `0..7`.
    fn weekday_column(&self, date: NaiveDate) -> u8 {
        let day = self.weekday(date).num_days_from_monday();
        let first = self.first_weekday().num_days_from_monday();
        let week = u32::from(DAYS_PER_WEEK);
        ((day + week - first) % week) as u8
    }
}

/// Gregorian calendar backed by chrono, with a configurable locale first
/// weekday and an optional fixed "today" (used by tests and previews; the
/// default asks the local clock).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianCalendar {
    first_weekday: Weekday,
    today: Option<NaiveDate>,
}

impl GregorianCalendar {
    /// Creates a calendar whose week rows start on `first_weekday`.
    pub const fn new(first_weekday: Weekday) -> Self {
        Self {
            first_weekday,
            today: None,
        }
    }

    /// Pins "today" to a fixed date instead of the local clock.
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

impl Default for GregorianCalendar {
    fn default() -> Self {
        Self::new(Weekday::Mon)
    }
}

impl CalendarSystem for GregorianCalendar {
    fn start_of_month(&self, date: NaiveDate) -> NaiveDate {
        // Day 1 exists in every month, so the fallback is never taken.
        date.with_day(1).unwrap_or(date)
    }

    fn add_months(&self, date: NaiveDate, months: u32) -> Option<NaiveDate> {
        date.checked_add_months(Months::new(months))
    }

    fn months_between(&self, from: NaiveDate, to: NaiveDate) -> i32 {
        (to.year() - from.year()) * MONTHS_PER_YEAR + (to.month0() as i32 - from.month0() as i32)
    }

    fn days_in_month(&self, date: NaiveDate) -> u32 {
        let first = self.start_of_month(date);
        let next = first
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        next.signed_duration_since(first).num_days() as u32
    }

    fn weekday(&self, date: NaiveDate) -> Weekday {
        date.weekday()
    }

    fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
