use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DateKeyError {
    #[error("Invalid date key '{0}'. Use YYYY-MM-DD.")]
    Malformed(String),
    #[error("Date {0} does not exist")]
    OutOfRange(String),
}

/// A day on the local calendar. There is no time-of-day component, so two
/// dates compare and subtract by their year/month/day fields alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date on the host calendar. This is the only place the host
    /// time zone is consulted.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// `YYYY-MM-DD` built from the date's own fields.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    /// Monday=1 … Sunday=7.
    pub fn iso_day_of_week(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    pub fn days_since(&self, earlier: CalendarDate) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    pub fn add_days(&self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        shifted.map(Self)
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth { year: self.year(), month: self.month() }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for CalendarDate {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateKeyError::Malformed(s.to_string());

        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(malformed());
        }

        let year = y.parse::<i32>().map_err(|_| malformed())?;
        let month = m.parse::<u32>().map_err(|_| malformed())?;
        let day = d.parse::<u32>().map_err(|_| malformed())?;

        Self::from_ymd(year, month, day).ok_or_else(|| DateKeyError::OutOfRange(s.to_string()))
    }
}

pub fn date_key(date: CalendarDate) -> String {
    date.key()
}

pub fn iso_day_of_week(date: CalendarDate) -> u32 {
    date.iso_day_of_week()
}

/// The month shown by the grid. Navigation steps whole months, so there is
/// no day-of-month to overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn first_day(&self) -> Option<CalendarDate> {
        CalendarDate::from_ymd(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> Option<CalendarDate> {
        self.next().first_day().and_then(|d| d.pred())
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().map(|d| d.day()).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }
}
