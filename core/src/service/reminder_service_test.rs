#[cfg(test)]
mod tests {
    use crate::model::event::Event;
    use crate::repository::EventRepository;
    use crate::service::reminder_service::{summarize_month, ReminderService};
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;

    struct MockEventRepo {
        events: Vec<Event>,
    }

    impl EventRepository for MockEventRepo {
        fn list(&self) -> Result<Vec<Event>> { Ok(self.events.clone()) }
    }

    struct FailingRepo;
    impl EventRepository for FailingRepo {
        fn list(&self) -> Result<Vec<Event>> { Err(anyhow!("1 errors in ~/.birthday")) }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> ReminderService<MockEventRepo> {
        let events = vec![
            Event::parse("12-24", "Christmas Eve").unwrap(),
            Event::parse("1990-05-17", "Alice").unwrap(),
            Event::parse("05-18", "Wedding anniversary").unwrap(),
            Event::parse("2001-05-20", "Dave").unwrap(),
            Event::parse("1985-05-03", "Erin").unwrap(),
        ];
        ReminderService::new(MockEventRepo { events })
    }

    #[test]
    fn test_upcoming_sorted_by_days_remaining() {
        let reminders = service().upcoming(date(2024, 5, 17), &[], None).unwrap();
        let lines: Vec<String> = reminders.iter().map(|r| r.to_string()).collect();

        assert_eq!(
            lines,
            vec![
                "Alice (34) today",
                "Wedding anniversary tomorrow",
                "Dave (23) in 3 days (2024-05-20)",
                "Christmas Eve in 221 days (2024-12-24)",
                "Erin (40) in 351 days (2025-05-03)",
            ]
        );
        assert!(reminders.iter().all(|r| r.date >= date(2024, 5, 17)));
    }

    #[test]
    fn test_upcoming_filters_by_days() {
        let reminders = service().upcoming(date(2024, 5, 17), &[1, 3], None).unwrap();
        let names: Vec<&str> = reminders.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, vec!["Wedding anniversary", "Dave"]);

        let none = service().upcoming(date(2024, 5, 17), &[2], None).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_upcoming_respects_limit() {
        let reminders = service().upcoming(date(2024, 5, 17), &[], Some(2)).unwrap();
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[1].description, "Wedding anniversary");
    }

    #[test]
    fn test_month_summary() {
        let summary = service().month_summary(2024, 5, None).unwrap();
        assert_eq!(
            summary.lines(),
            vec![
                "2024-05-03: Erin (39)",
                "2024-05-17: Alice (34)",
                "2024-05-18: Wedding anniversary",
                "2024-05-20: Dave (23)",
            ]
        );

        let limited = service().month_summary(2024, 5, Some(1)).unwrap();
        assert_eq!(limited.lines(), vec!["2024-05-03: Erin (39)"]);
    }

    #[test]
    fn test_month_summary_empty() {
        let summary = service().month_summary(2024, 3, None).unwrap();
        assert_eq!(summary.lines(), vec!["No events in 2024-03"]);
    }

    #[test]
    fn test_month_summary_rejects_unsupported_year() {
        assert!(service().month_summary(300000, 5, None).is_err());

        let events = vec![Event::parse("05-17", "Alice").unwrap()];
        let summary = summarize_month(&events, 300000, 5, None);
        assert!(summary.entries.is_empty());
    }

    #[test]
    fn test_repository_failure_propagates() {
        let service = ReminderService::new(FailingRepo);
        assert!(service.upcoming(date(2024, 5, 17), &[], None).is_err());
        assert!(service.month_summary(2024, 5, None).is_err());
    }
}
