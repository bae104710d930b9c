use chrono::{Datelike, NaiveDate};

use crate::error::ParseError;
use crate::model::date_spec::DateSpec;
use crate::time::supported_years;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub description: String,
    pub date: DateSpec,
}

/// An event projected onto a concrete day relative to some reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub days_remaining: i64,
    pub elapsed_years: Option<i32>,
}

impl Event {
    pub fn new(description: String, date: DateSpec) -> Self {
        Self { description, date }
    }

    pub fn parse(date_token: &str, description: &str) -> Result<Self, ParseError> {
        let date = DateSpec::parse(date_token)?;
        Ok(Self::new(description.to_string(), date))
    }

    pub fn next_occurrence(&self, reference: NaiveDate) -> Occurrence {
        let date = self.date.next_occurrence(reference);
        Occurrence {
            date,
            days_remaining: (date - reference).num_days(),
            elapsed_years: self.date.elapsed_years(date.year()),
        }
    }

    /// The anniversary in the given month, if the event has one there.
    /// Dated events only count from their origin year onwards.
    pub fn occurrence_in_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        if !supported_years().contains(&year) {
            return None;
        }
        if self.date.origin_year().is_some_and(|origin| origin > year) {
            return None;
        }
        let date = self.date.in_year(year);
        (date.month() == month).then_some(date)
    }
}
