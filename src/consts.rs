/// Columns in a week row
pub const DAYS_PER_WEEK: u8 = 7;

/// Fewest week rows any month can occupy (February starting on the
/// locale first weekday)
pub const MIN_WEEKS_PER_MONTH: u8 = 4;

/// Most week rows any month can occupy (a 30/31-day month starting at
/// the end of a week)
pub const MAX_WEEKS_PER_MONTH: u8 = 6;

/// Highest valid weekday column (columns are `0..=6`)
pub const MAX_COLUMN: u8 = DAYS_PER_WEEK - 1;

/// Months per Gregorian year, for whole-month difference arithmetic
pub const MONTHS_PER_YEAR: i32 = 12;

/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
