use crate::model::event::Event;
use crate::repository::EventRepository;
use crate::service::dto::{MonthSummary, ReminderDto, SummaryEntry};
use crate::time::check_year;
use anyhow::Result;
use chrono::NaiveDate;

pub struct ReminderService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> ReminderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Reminders relative to `reference`, soonest first. An empty `days`
    /// keeps every event.
    pub fn upcoming(
        &self,
        reference: NaiveDate,
        days: &[i64],
        limit: Option<usize>,
    ) -> Result<Vec<ReminderDto>> {
        let events = self.repo.list()?;
        let reminders = select_upcoming(&events, reference, days, limit);
        log::debug!("Selected {} of {} events", reminders.len(), events.len());
        Ok(reminders)
    }

    pub fn month_summary(&self, year: i32, month: u32, limit: Option<usize>) -> Result<MonthSummary> {
        check_year(year)?;
        let events = self.repo.list()?;
        Ok(summarize_month(&events, year, month, limit))
    }
}

// Standalone functions for pure logic

pub fn select_upcoming(
    events: &[Event],
    reference: NaiveDate,
    days: &[i64],
    limit: Option<usize>,
) -> Vec<ReminderDto> {
    let mut reminders: Vec<ReminderDto> = events
        .iter()
        .map(|e| ReminderDto::from_entity(e, reference))
        .filter(|r| days.is_empty() || days.contains(&r.days_remaining))
        .collect();

    reminders.sort_by_key(|r| r.days_remaining);
    if let Some(limit) = limit {
        reminders.truncate(limit);
    }
    reminders
}

pub fn summarize_month(events: &[Event], year: i32, month: u32, limit: Option<usize>) -> MonthSummary {
    let mut entries: Vec<SummaryEntry> = events
        .iter()
        .filter_map(|e| {
            e.occurrence_in_month(year, month)
                .map(|date| SummaryEntry::from_entity(e, date))
        })
        .collect();

    entries.sort_by_key(|e| e.date);
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    MonthSummary { year, month, entries }
}
