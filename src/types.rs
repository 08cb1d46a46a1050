use crate::GridError;
use crate::consts::MAX_COLUMN;
use crate::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Zero-based index of a month section within the configured date range.
pub type MonthIndex = u32;

/// Position of one cell in the month grid: `(month, week row, weekday
/// column)`, the column relative to the locale first weekday.
/// The column is guaranteed to be in the range `0..=6`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{month}:{week}:{column}")]
#[serde(try_from = "(u32, u8, u8)", into = "(u32, u8, u8)")]
pub struct CellCoordinate {
    month: MonthIndex,
    week: u8,
    column: u8,
}

impl CellCoordinate {
    /// Creates a new coordinate, validating that the column fits a week row.
    ///
    /// # Errors
    /// Returns `GridError::InvalidColumn` if `column > 6`. Month and week
    /// bounds depend on a grid and are checked by the grid's operations.
    pub fn new(month: MonthIndex, week: u8, column: u8) -> Result<Self, GridError> {
        if column > MAX_COLUMN {
            return Err(GridError::InvalidColumn(column));
        }
        Ok(Self {
            month,
            week,
            column,
        })
    }

    /// Returns the month section index
    #[inline]
    pub const fn month(self) -> MonthIndex {
        self.month
    }

    /// Returns the week row within the month
    #[inline]
    pub const fn week(self) -> u8 {
        self.week
    }

    /// Returns the weekday column within the week row
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }
}

impl TryFrom<(u32, u8, u8)> for CellCoordinate {
    type Error = GridError;

    fn try_from(value: (u32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<CellCoordinate> for (u32, u8, u8) {
    fn from(coordinate: CellCoordinate) -> Self {
        (coordinate.month, coordinate.week, coordinate.column)
    }
}

/// Visual state of one grid cell, derived per call and never stored.
///
/// Placeholder cells (the blanks padding the first and last week rows of a
/// month) carry no date; every flag on them is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState {
    /// The in-month date at this cell, `None` for a placeholder
    pub date: Option<NaiveDate>,
    /// Whether the date falls inside the configured range (inclusive)
    pub in_range: bool,
    /// Whether the date is the calendar's current day
    pub today: bool,
    /// Whether the date matches the selected-date snapshot
    pub selected: bool,
}

impl CellState {
    pub(crate) const fn placeholder() -> Self {
        Self {
            date: None,
            in_range: false,
            today: false,
            selected: false,
        }
    }

    /// True when this cell pads a week row and has no in-month date
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }
}
