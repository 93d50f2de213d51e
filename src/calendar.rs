use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_MONTH, MONTH_NAMES,
    WEEKDAY_NAMES,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, ordered the way the weekday table is indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Maps an epoch day count (0001-01-01 is day 1) onto the weekday table.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_day_count(day_count: i64) -> Self {
        // rem_euclid keeps the index in 0..7 even for counts below 1
        Self::ALL[day_count.rem_euclid(DAYS_IN_WEEK) as usize]
    }

    /// Returns the weekday's name
    #[inline]
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Upper day bound for `month` in `year`.
/// Returns 0 for months outside `1..=12`, so every day is rejected.
#[allow(clippy::cast_sign_loss)]
pub const fn days_in_month(year: i32, month: i32) -> u8 {
    if month < MIN_MONTH || month > MAX_MONTH {
        return 0;
    }

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// English name of `month`, or `"Invalid"` outside `1..=12`.
#[allow(clippy::cast_sign_loss)]
pub const fn month_name(month: i32) -> &'static str {
    if month < MIN_MONTH || month > MAX_MONTH {
        MONTH_NAMES[0]
    } else {
        MONTH_NAMES[month as usize]
    }
}
