use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::model::event::Event;
use crate::time::relative_phrase;

/// One line of the upcoming-events listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderDto {
    pub description: String,
    pub date: NaiveDate,
    pub days_remaining: i64,
    pub elapsed_years: Option<i32>,
}

impl ReminderDto {
    pub fn from_entity(event: &Event, reference: NaiveDate) -> Self {
        let occurrence = event.next_occurrence(reference);
        Self {
            description: event.description.clone(),
            date: occurrence.date,
            days_remaining: occurrence.days_remaining,
            elapsed_years: occurrence.elapsed_years,
        }
    }
}

impl fmt::Display for ReminderDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if let Some(years) = self.elapsed_years {
            write!(f, " ({})", years)?;
        }
        write!(f, " {}", relative_phrase(self.days_remaining, self.date))
    }
}

/// One line of a month summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub description: String,
    pub date: NaiveDate,
    pub elapsed_years: Option<i32>,
}

impl SummaryEntry {
    pub fn from_entity(event: &Event, date: NaiveDate) -> Self {
        Self {
            description: event.description.clone(),
            date,
            elapsed_years: event.date.elapsed_years(date.year()),
        }
    }
}

impl fmt::Display for SummaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date.format("%Y-%m-%d"), self.description)?;
        if let Some(years) = self.elapsed_years {
            write!(f, " ({})", years)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub entries: Vec<SummaryEntry>,
}

impl MonthSummary {
    /// Output lines, or a single notice when the month is empty.
    pub fn lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![format!("No events in {:04}-{:02}", self.year, self.month)];
        }
        self.entries.iter().map(|e| e.to_string()).collect()
    }
}
