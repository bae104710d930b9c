use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate};
use anyhow::{anyhow, Result};

/// Local calendar date. Only the binary should call this; everything else
/// takes the reference date as a parameter.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Years every anniversary can be projected onto, leaving room to roll
/// over into the following year.
pub fn supported_years() -> RangeInclusive<i32> {
    NaiveDate::MIN.year()..=NaiveDate::MAX.year() - 1
}

pub fn check_year(year: i32) -> Result<i32> {
    let range = supported_years();
    if !range.contains(&year) {
        return Err(anyhow!(
            "Year out of range ({}-{}): {}",
            range.start(),
            range.end(),
            year
        ));
    }
    Ok(year)
}

pub fn parse_year(input: &str) -> Result<i32> {
    let year: i32 = input.trim().parse().map_err(|_| anyhow!("Invalid year: {}", input))?;
    check_year(year)
}

pub fn parse_reference_date(input: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))?;
    check_year(date.year())?;
    Ok(date)
}

pub fn parse_month(input: &str) -> Result<u32> {
    let month: u32 = input.trim().parse().map_err(|_| anyhow!("Invalid month: {}", input))?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month out of range (1-12): {}", month));
    }
    Ok(month)
}

/// Accepts `YEAR-MONTH`, e.g. `2024-05`.
pub fn parse_year_month(input: &str) -> Result<(i32, u32)> {
    let (year_str, month_str) = input
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("Expected YEAR-MONTH, got: {}", input))?;
    Ok((parse_year(year_str)?, parse_month(month_str)?))
}

/// "today", "tomorrow" or "in N days", the latter with the date from 3 days on.
pub fn relative_phrase(days_remaining: i64, date: NaiveDate) -> String {
    match days_remaining {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n if n >= 3 => format!("in {} days ({})", n, date.format("%Y-%m-%d")),
        n => format!("in {} days", n),
    }
}
