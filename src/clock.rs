//! Sources of "today" for year validation and [`Date::today`](crate::Date::today).

use chrono::{Local, NaiveDate};

/// Something that can report the current calendar date.
///
/// Dates come back as [`NaiveDate`], so a clock can never report a day that does not exist.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the host's local calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a clock from components, or `None` if they are not a calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
