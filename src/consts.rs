/// Smallest valid year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Smallest valid month (January)
pub const MIN_MONTH: i32 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: i32 = 1;

/// Month number for February
pub const FEBRUARY: i32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Length of a common year
pub const DAYS_IN_COMMON_YEAR: i64 = 365;
/// Length of a leap year
pub const DAYS_IN_LEAP_YEAR: i64 = 366;
/// Length of a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Month names (index 0 is a placeholder for out-of-range months)
pub const MONTH_NAMES: [&str; 13] = [
    "Invalid",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names indexed by `day count % 7`.
/// Day 1 (0001-01-01) was a Monday, so the table starts at Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Components of `Date::default()`
pub const DEFAULT_YEAR: i32 = 1;
pub const DEFAULT_MONTH: i32 = 1;
pub const DEFAULT_DAY: i32 = 1;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Separator used by the `YYYY/MM/DD` form
pub const YEAR_MONTH_DAY_SEPARATOR: char = '/';
/// Digit widths of the `YYYY/MM/DD` components
pub const YEAR_DIGITS: usize = 4;
pub const MONTH_DIGITS: usize = 2;
pub const DAY_DIGITS: usize = 2;
