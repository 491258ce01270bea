//! In-memory event store.
//!
//! Owns the calendar annotations so an event and its annotation are always
//! created together.

use crate::calendar::Annotations;
use crate::event::{Event, EventId};

#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<(EventId, Event)>,
    annotations: Annotations,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate the event's date and append the event
    pub fn add_event(&mut self, event: Event) -> EventId {
        let id = self.annotations.create(
            event.date(),
            event.title(),
            vec![event.category().as_str().to_string()],
        );
        tracing::info!("Added {} '{}' on {}", event.category(), event.title(), event.date());
        self.events.push((id, event));
        id
    }

    /// All events in insertion order
    pub fn get_events(&self) -> &[(EventId, Event)] {
        &self.events
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;
    use chrono::NaiveDate;

    #[test]
    fn test_add_event_annotates_date() {
        let mut store = EventStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 3, 22).unwrap();
        let id = store.add_event(Event::new(date, "Midterm", Category::Exam));

        assert_eq!(store.len(), 1);
        let ann = store.annotations().get(id).unwrap();
        assert_eq!(ann.date, date);
        assert_eq!(ann.text, "Midterm");
        assert_eq!(ann.tags, ["Exam"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let mut store = EventStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let a = store.add_event(Event::new(date, "Quiz", Category::Quiz));
        let b = store.add_event(Event::new(date, "Quiz", Category::Quiz));

        let ids: Vec<_> = store.get_events().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, [a, b]);
        assert_eq!(store.annotations().on_date(date).count(), 2);
    }

    #[test]
    fn test_every_event_has_annotation() {
        let mut store = EventStore::new();
        for d in 1..=10 {
            let date = NaiveDate::from_ymd_opt(2025, 5, d).unwrap();
            store.add_event(Event::new(date, format!("hw {d}"), Category::Homework));
        }

        for (id, event) in store.get_events() {
            let ann = store.annotations().get(*id).unwrap();
            assert_eq!(ann.date, event.date());
            assert_eq!(ann.text, event.title());
        }
        assert_eq!(store.annotations().len(), store.len());
    }
}
