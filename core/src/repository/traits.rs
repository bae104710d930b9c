use crate::model::event::Event;
use anyhow::Result;

pub trait EventRepository {
    fn list(&self) -> Result<Vec<Event>>;
}
