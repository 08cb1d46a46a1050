mod calendar;
mod consts;
mod prelude;
mod range;
mod types;

pub use calendar::{CalendarSystem, GregorianCalendar};
pub use consts::*;
pub use range::{DateRange, RangeError};
pub use types::{CellCoordinate, CellState, MonthIndex};

use chrono::{Datelike, Days, NaiveDate};

/// Error type for grid indexing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Month index at or past the number of displayed months.
    #[error("Month index {month} out of range (grid has {count} months)")]
    MonthOutOfRange { month: MonthIndex, count: u32 },

    /// Week row at or past the month's week count.
    #[error("Coordinate {coordinate} out of range (month has {weeks} week rows)")]
    CoordinateOutOfRange {
        coordinate: CellCoordinate,
        weeks: u8,
    },

    /// Date outside the displayed month span.
    #[error("Date {date} falls outside the displayed months")]
    DateOutOfRange { date: NaiveDate },

    /// Weekday column past the end of a week row.
    #[error("Invalid weekday column: {0} (must be 0-{MAX_COLUMN})")]
    InvalidColumn(u8),
}

/// Pure mapping between calendar dates and the month-grid coordinate space
/// a calendar-picker host renders: one section per month, one row per week,
/// one column per weekday starting at the locale first weekday.
///
/// The grid holds the configured [`DateRange`] and borrows a
/// [`CalendarSystem`]; it has no other state. Selection is a snapshot the
/// host passes per call, so concurrent rendering passes can share one grid.
///
/// Months at the edges of the range are laid out whole: days of a partial
/// first or last month get coordinates and report
/// [`in_range == false`](CellState::in_range) rather than disappearing.
#[derive(Debug, Clone, Copy)]
pub struct MonthGrid<'a, C: CalendarSystem> {
    range: DateRange,
    calendar: &'a C,
}

/// Per-month layout figures shared by the cell operations.
struct MonthLayout {
    first: NaiveDate,
    leading: u8,
    days: u32,
    weeks: u8,
}

impl<'a, C: CalendarSystem> MonthGrid<'a, C> {
    /// Creates a grid over an already-validated range.
    pub const fn new(range: DateRange, calendar: &'a C) -> Self {
        Self { range, calendar }
    }

    /// Returns the configured date range
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Number of month sections, inclusive of partial first and last months.
    /// Always at least 1.
    pub fn month_count(&self) -> u32 {
        let start = self.calendar.start_of_month(self.range.start());
        let end = self.calendar.start_of_month(self.range.end());
        // Non-negative: the range invariant orders start before end.
        self.calendar.months_between(start, end) as u32 + 1
    }

    /// The normalized first day of the month at `month`.
    ///
    /// # Errors
    /// Returns `GridError::MonthOutOfRange` past the last displayed month.
    pub fn first_of_month(&self, month: MonthIndex) -> Result<NaiveDate, GridError> {
        let count = self.month_count();
        if month >= count {
            return Err(GridError::MonthOutOfRange { month, count });
        }
        let origin = self.calendar.start_of_month(self.range.start());
        self.calendar
            .add_months(origin, month)
            .ok_or(GridError::MonthOutOfRange { month, count })
    }

    /// Number of blank cells before day 1 in the month's first week row:
    /// `(weekday_of_first - locale_first_weekday + 7) mod 7`.
    pub fn leading_placeholders(&self, month: MonthIndex) -> Result<u8, GridError> {
        Ok(self.layout(month)?.leading)
    }

    /// Number of week rows needed to display the month at `month`,
    /// always in `4..=6`.
    pub fn weeks_in_month(&self, month: MonthIndex) -> Result<u8, GridError> {
        Ok(self.layout(month)?.weeks)
    }

    /// Resolves a coordinate to its cell state: the in-month date (or a
    /// placeholder for leading/trailing blanks) plus the in-range, today,
    /// and selected flags. Range checks are inclusive on both ends.
    ///
    /// # Errors
    /// Returns `GridError::MonthOutOfRange` or `GridError::CoordinateOutOfRange`
    /// when the coordinate lies outside the grid.
    pub fn cell_at(
        &self,
        coordinate: CellCoordinate,
        selected: Option<NaiveDate>,
    ) -> Result<CellState, GridError> {
        let layout = self.layout(coordinate.month())?;
        if coordinate.week() >= layout.weeks {
            return Err(GridError::CoordinateOutOfRange {
                coordinate,
                weeks: layout.weeks,
            });
        }

        let slot =
            u32::from(coordinate.week()) * u32::from(DAYS_PER_WEEK) + u32::from(coordinate.column());
        let Some(day_offset) = slot.checked_sub(u32::from(layout.leading)) else {
            return Ok(CellState::placeholder());
        };
        if day_offset >= layout.days {
            return Ok(CellState::placeholder());
        }

        let date = layout.first + Days::new(u64::from(day_offset));
        Ok(CellState {
            date: Some(date),
            in_range: self.range.contains(date),
            today: date == self.calendar.today(),
            selected: selected == Some(date),
        })
    }

    /// One full week row of cell states, the unit a table-backed host
    /// renders per row.
    pub fn week_row(
        &self,
        month: MonthIndex,
        week: u8,
        selected: Option<NaiveDate>,
    ) -> Result<[CellState; DAYS_PER_WEEK as usize], GridError> {
        let mut row = [CellState::placeholder(); DAYS_PER_WEEK as usize];
        for (column, cell) in row.iter_mut().enumerate() {
            let coordinate = CellCoordinate::new(month, week, column as u8)?;
            *cell = self.cell_at(coordinate, selected)?;
        }
        Ok(row)
    }

    /// The coordinate displaying `date`.
    ///
    /// # Errors
    /// Returns `GridError::DateOutOfRange` when `date` falls before the
    /// first displayed month or after the last one. Dates inside a partial
    /// first or last month resolve normally; their cells report
    /// `in_range == false`.
    pub fn coordinate_for(&self, date: NaiveDate) -> Result<CellCoordinate, GridError> {
        let origin = self.calendar.start_of_month(self.range.start());
        let month = self.calendar.months_between(origin, date);
        if month < 0 || month as u32 >= self.month_count() {
            return Err(GridError::DateOutOfRange { date });
        }

        let first = self.calendar.start_of_month(date);
        let slot = u32::from(self.calendar.weekday_column(first)) + date.day0();
        let week = u32::from(DAYS_PER_WEEK);
        CellCoordinate::new(month as u32, (slot / week) as u8, (slot % week) as u8)
    }

    /// First-of-month dates for every section, in order; what a host feeds
    /// its month header views.
    pub fn month_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let origin = self.calendar.start_of_month(self.range.start());
        (0..self.month_count()).filter_map(move |month| self.calendar.add_months(origin, month))
    }

    fn layout(&self, month: MonthIndex) -> Result<MonthLayout, GridError> {
        let first = self.first_of_month(month)?;
        let leading = self.calendar.weekday_column(first);
        let days = self.calendar.days_in_month(first);
        let weeks = (u32::from(leading) + days).div_ceil(u32::from(DAYS_PER_WEEK)) as u8;
        Ok(MonthLayout {
            first,
            leading,
            days,
            weeks,
        })
    }
}
