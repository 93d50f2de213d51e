mod calendar;
mod clock;
mod consts;
mod prelude;

pub use calendar::{Weekday, days_in_month, days_in_year, is_leap_year, month_name};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use tracing::{debug, trace};

/// A proleptic Gregorian calendar date.
///
/// Values built through [`Date::new`] (or any other validating path) satisfy
/// `1 <= year <= current year`, `1 <= month <= 12` and
/// `1 <= day <= days_in_month(year, month)`.
/// Equality is field-wise; ordering follows [`Date::days_since_epoch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year:  i32,
    month: i32,
    day:   i32,
}

/// Error type for date validation.
/// Each validated component has its own variant so callers can react to the field at fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year is below 1 or after the current year.
    #[error("Invalid year: {year} (must be between 1 and {max})")]
    InvalidYear { year: i32, max: i32 },

    /// Month is outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i32),

    /// Day is below 1 or past the end of its month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },

    /// Text is not in `YYYY/MM/DD` form.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

impl Date {
    /// Creates a validated date, bounding the year by the system clock.
    ///
    /// Components are checked year, then month, then day; the first failure is returned.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or `DateError::InvalidDay`
    /// for the first component that breaks its rule.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        Self::new_with_clock(year, month, day, &SystemClock)
    }

    /// Same as [`Date::new`], reading the current year from `clock`.
    ///
    /// # Errors
    /// See [`Date::new`].
    pub fn new_with_clock(year: i32, month: i32, day: i32, clock: &impl Clock) -> Result<Self, DateError> {
        validate(year, month, day, clock)?;
        Ok(Self::from_trusted_components(year, month, day))
    }

    /// Builds a date without any checks.
    /// Only for callers that already know the components form a valid date.
    pub(crate) const fn from_trusted_components(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Today's date according to the system clock
    pub fn today() -> Self {
        Self::today_with_clock(&SystemClock)
    }

    /// Today's date according to `clock`.
    /// Clocks only report real calendar dates, so this never goes through validation.
    #[allow(clippy::cast_possible_wrap)]
    pub fn today_with_clock(clock: &impl Clock) -> Self {
        let today = clock.today();
        // chrono months and days are 1-based and always fit in i32
        let (year, month, day) = (today.year(), today.month() as i32, today.day() as i32);
        trace!(year, month, day, "read today from clock");
        Self::from_trusted_components(year, month, day)
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Replaces all three components.
    /// Nothing is assigned unless year, month and day all pass validation.
    ///
    /// # Errors
    /// See [`Date::new`].
    pub fn set_date(&mut self, year: i32, month: i32, day: i32) -> Result<(), DateError> {
        self.set_date_with_clock(year, month, day, &SystemClock)
    }

    /// Same as [`Date::set_date`], reading the current year from `clock`.
    ///
    /// # Errors
    /// See [`Date::new`].
    pub fn set_date_with_clock(
        &mut self,
        year: i32,
        month: i32,
        day: i32,
        clock: &impl Clock,
    ) -> Result<(), DateError> {
        *self = Self::new_with_clock(year, month, day, clock)?;
        Ok(())
    }

    /// Replaces the year after checking it against the system clock.
    /// The day is not re-checked, so set the year before the day when both change.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if `year < 1` or `year` is after the current year.
    pub fn set_year(&mut self, year: i32) -> Result<(), DateError> {
        self.set_year_with_clock(year, &SystemClock)
    }

    /// Same as [`Date::set_year`], reading the current year from `clock`.
    ///
    /// # Errors
    /// See [`Date::set_year`].
    pub fn set_year_with_clock(&mut self, year: i32, clock: &impl Clock) -> Result<(), DateError> {
        check_year(year, clock)?;
        self.year = year;
        Ok(())
    }

    /// Replaces the month.
    /// The day is not re-checked, so set the month before the day when both change.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`.
    pub fn set_month(&mut self, month: i32) -> Result<(), DateError> {
        check_month(month)?;
        self.month = month;
        Ok(())
    }

    /// Replaces the day, bounded by the date's current month and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in the current month.
    pub fn set_day(&mut self, day: i32) -> Result<(), DateError> {
        check_day(self.year, self.month, day)?;
        self.day = day;
        Ok(())
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days from 0001-01-01 (day 1) up to and including this date.
    /// Years before 1 count backwards, so 0000-12-31 is day 0.
    #[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
    pub const fn days_since_epoch(&self) -> i64 {
        let mut total = 0;

        let mut year = MIN_YEAR;
        while year < self.year {
            total += days_in_year(year);
            year += 1;
        }

        let mut year = self.year;
        while year < MIN_YEAR {
            total -= days_in_year(year);
            year += 1;
        }

        let mut month = MIN_MONTH;
        while month < self.month && month <= MAX_MONTH {
            total += DAYS_IN_MONTH[month as usize] as i64;
            month += 1;
        }

        if self.is_leap_year() && self.month > FEBRUARY {
            total += 1;
        }

        total + self.day as i64
    }

    /// True if this date falls strictly after `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self.days_since_epoch() > other.days_since_epoch()
    }

    /// True if this date falls strictly before `other`.
    pub fn is_before(&self, other: &Self) -> bool {
        other.is_after(self)
    }

    /// Absolute number of days between the two dates.
    pub fn difference_in_days(&self, other: &Self) -> i64 {
        (self.days_since_epoch() - other.days_since_epoch()).abs()
    }

    /// Absolute number of days between this date and the date built from the given components.
    ///
    /// # Errors
    /// Returns the validation error of [`Date::new`] if the components are not a valid date.
    pub fn difference_in_days_to(&self, year: i32, month: i32, day: i32) -> Result<i64, DateError> {
        self.difference_in_days_to_with_clock(year, month, day, &SystemClock)
    }

    /// Same as [`Date::difference_in_days_to`], reading the current year from `clock`.
    ///
    /// # Errors
    /// See [`Date::difference_in_days_to`].
    pub fn difference_in_days_to_with_clock(
        &self,
        year: i32,
        month: i32,
        day: i32,
        clock: &impl Clock,
    ) -> Result<i64, DateError> {
        let other = Self::new_with_clock(year, month, day, clock)?;
        Ok(self.difference_in_days(&other))
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_day_count(self.days_since_epoch())
    }

    /// English name of the month
    pub const fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Formats as `YYYY/MM/DD` with zero padding.
    pub fn to_year_month_day_string(&self) -> String {
        format!(
            "{:04}{sep}{:02}{sep}{:02}",
            self.year,
            self.month,
            self.day,
            sep = YEAR_MONTH_DAY_SEPARATOR
        )
    }
}

// --- validation, one rule per component ---

fn validate(year: i32, month: i32, day: i32, clock: &impl Clock) -> Result<(), DateError> {
    check_year(year, clock)?;
    check_month(month)?;
    check_day(year, month, day)
}

fn check_year(year: i32, clock: &impl Clock) -> Result<(), DateError> {
    let max = Date::today_with_clock(clock).year;
    if year < MIN_YEAR || year > max {
        debug!(year, max, "rejected year");
        return Err(DateError::InvalidYear { year, max });
    }
    Ok(())
}

fn check_month(month: i32) -> Result<(), DateError> {
    if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
        debug!(month, "rejected month");
        return Err(DateError::InvalidMonth(month));
    }
    Ok(())
}

fn check_day(year: i32, month: i32, day: i32) -> Result<(), DateError> {
    let max_day = i32::from(days_in_month(year, month));
    if day < MIN_DAY || day > max_day {
        debug!(year, month, day, max_day, "rejected day");
        return Err(DateError::InvalidDay { year, month, day });
    }
    Ok(())
}

impl Default for Date {
    /// 0001-01-01
    fn default() -> Self {
        Self::from_trusted_components(DEFAULT_YEAR, DEFAULT_MONTH, DEFAULT_DAY)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.days_since_epoch().cmp(&other.days_since_epoch())
    }
}

impl fmt::Display for Date {
    /// `Thursday, 29 February 2024`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {} {}", self.weekday(), self.day, self.month_name(), self.year)
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses exactly the `YYYY/MM/DD` form produced by [`Date::to_year_month_day_string`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(YEAR_MONTH_DAY_SEPARATOR).collect();

        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{sep}MM{sep}DD, found {} separators in {s:?}",
                parts.len() - 1,
                sep = YEAR_MONTH_DAY_SEPARATOR
            )));
        };

        Self::new(
            parse_component(year, YEAR_DIGITS)?,
            parse_component(month, MONTH_DIGITS)?,
            parse_component(day, DAY_DIGITS)?,
        )
    }
}

/// Parses a fixed-width run of ASCII digits; signs, spaces and missing padding are rejected.
fn parse_component(s: &str, width: usize) -> Result<i32, DateError> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(format!(
            "expected {width} digits, found {s:?}"
        )));
    }
    s.parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(i32, i32, i32)> for Date {
    type Error = DateError;

    fn try_from((year, month, day): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<Date> for (i32, i32, i32) {
    fn from(date: Date) -> Self {
        (date.year, date.month, date.day)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_year_month_day_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
