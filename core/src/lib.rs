pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod notify;
pub mod repository;
pub mod service;
pub mod time;

pub use config::Config;
pub use error::{LineError, LoadError, ParseError};
pub use model::date_spec::DateSpec;
pub use model::event::{Event, Occurrence};
pub use repository::{EventRepository, FileEventRepository};
pub use input::{parse_events, parse_line, ParsedEvents};
pub use time::{check_year, first_of_month, parse_month, parse_reference_date, parse_year, parse_year_month, today};
pub use service::reminder_service::{ReminderService, select_upcoming, summarize_month};
pub use service::dto::{MonthSummary, ReminderDto, SummaryEntry};
pub use notify::{dispatch, Notification, Notifier, PushNotifier};
