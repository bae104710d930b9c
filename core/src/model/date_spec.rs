use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::ParseError;

static DATE_YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,4})-([0-9]{1,2})-([0-9]{1,2})$").expect("valid regex"));
static DATE_MD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2})-([0-9]{1,2})$").expect("valid regex"));

// Any leap year works for validating a year-less month/day.
const LEAP_YEAR: i32 = 2000;

/// When an event happens: either with a known origin year or every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    Dated { year: i32, month: u32, day: u32 },
    Recurring { month: u32, day: u32 },
}

impl DateSpec {
    /// Parses `YEAR-MONTH-DAY`, falling back to `MONTH-DAY`.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedDate(token.to_string());

        if let Some(caps) = DATE_YMD.captures(token) {
            let year: i32 = caps[1].parse().map_err(|_| malformed())?;
            let month: u32 = caps[2].parse().map_err(|_| malformed())?;
            let day: u32 = caps[3].parse().map_err(|_| malformed())?;
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)?;
            return Ok(DateSpec::Dated { year, month, day });
        }

        if let Some(caps) = DATE_MD.captures(token) {
            let month: u32 = caps[1].parse().map_err(|_| malformed())?;
            let day: u32 = caps[2].parse().map_err(|_| malformed())?;
            NaiveDate::from_ymd_opt(LEAP_YEAR, month, day).ok_or_else(malformed)?;
            return Ok(DateSpec::Recurring { month, day });
        }

        Err(malformed())
    }

    pub fn month(&self) -> u32 {
        match *self {
            DateSpec::Dated { month, .. } | DateSpec::Recurring { month, .. } => month,
        }
    }

    pub fn day(&self) -> u32 {
        match *self {
            DateSpec::Dated { day, .. } | DateSpec::Recurring { day, .. } => day,
        }
    }

    pub fn origin_year(&self) -> Option<i32> {
        match *self {
            DateSpec::Dated { year, .. } => Some(year),
            DateSpec::Recurring { .. } => None,
        }
    }

    /// The anniversary in `year`. Feb 29 falls on Mar 1 outside leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        // Only Feb 29 can miss: month/day were validated against a leap year.
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .expect("March 1 exists in every supported year")
    }

    /// Nearest anniversary on or after `reference`.
    pub fn next_occurrence(&self, reference: NaiveDate) -> NaiveDate {
        let candidate = self.in_year(reference.year());
        if candidate < reference {
            self.in_year(reference.year() + 1)
        } else {
            candidate
        }
    }

    /// Years between the origin year and the anniversary falling in `year`.
    pub fn elapsed_years(&self, year: i32) -> Option<i32> {
        self.origin_year().map(|origin| year - origin)
    }
}

impl fmt::Display for DateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DateSpec::Dated { year, month, day } => write!(f, "{:04}-{:02}-{:02}", year, month, day),
            DateSpec::Recurring { month, day } => write!(f, "{:02}-{:02}", month, day),
        }
    }
}
