//! Task list text: all events, oldest date first.

use crate::event::{Event, EventId};

/// Shown when there are no events
pub const NO_EVENTS: &str = "No events";

/// Events sorted by date; equal dates keep insertion order
pub fn sorted_events(entries: &[(EventId, Event)]) -> Vec<&Event> {
    let mut events: Vec<&Event> = entries.iter().map(|(_, e)| e).collect();
    events.sort_by_key(|e| e.date_key());
    events
}

/// Render the task list as blank-line separated `Name`/`Date` blocks
pub fn render_task_list(entries: &[(EventId, Event)]) -> String {
    if entries.is_empty() {
        return NO_EVENTS.to_string();
    }

    sorted_events(entries)
        .into_iter()
        .map(|e| format!("Name: {}\nDate: {}/{}/{}", e.title(), e.month(), e.day(), e.year()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;
    use crate::store::EventStore;
    use chrono::NaiveDate;

    fn add(store: &mut EventStore, y: i32, m: u32, d: u32, title: &str) {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        store.add_event(Event::new(date, title, Category::Exam));
    }

    #[test]
    fn test_empty_placeholder() {
        assert_eq!(render_task_list(&[]), "No events");
    }

    #[test]
    fn test_single_event() {
        let mut store = EventStore::new();
        add(&mut store, 2025, 3, 22, "Midterm");
        assert_eq!(render_task_list(store.get_events()), "Name: Midterm\nDate: 3/22/2025");
    }

    #[test]
    fn test_sorted_by_year_month_day() {
        let mut store = EventStore::new();
        add(&mut store, 2026, 1, 5, "c");
        add(&mut store, 2025, 12, 1, "b");
        add(&mut store, 2025, 2, 28, "a");
        add(&mut store, 2025, 12, 31, "b2");

        let titles: Vec<_> = sorted_events(store.get_events()).iter().map(|e| e.title()).collect();
        assert_eq!(titles, ["a", "b", "b2", "c"]);

        let text = render_task_list(store.get_events());
        assert!(text.starts_with("Name: a\nDate: 2/28/2025\n\nName: b\n"));
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let mut store = EventStore::new();
        add(&mut store, 2025, 5, 1, "later date");
        for t in ["first", "second", "third"] {
            add(&mut store, 2025, 4, 10, t);
        }

        let titles: Vec<_> = sorted_events(store.get_events()).iter().map(|e| e.title()).collect();
        assert_eq!(titles, ["first", "second", "third", "later date"]);
    }

    #[test]
    fn test_sort_is_non_decreasing() {
        let mut store = EventStore::new();
        // Deterministic scramble of dates
        for i in 0..60u32 {
            let d = (i * 7) % 28 + 1;
            let m = (i * 5) % 12 + 1;
            let y = 2024 + (i % 3) as i32;
            add(&mut store, y, m, d, &format!("e{i}"));
        }

        let keys: Vec<_> = sorted_events(store.get_events()).iter().map(|e| e.date_key()).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(keys.len(), 60);
    }

    #[test]
    fn test_render_does_not_touch_store() {
        let mut store = EventStore::new();
        add(&mut store, 2025, 6, 2, "z");
        add(&mut store, 2025, 6, 1, "y");
        render_task_list(store.get_events());

        let titles: Vec<_> = store.get_events().iter().map(|(_, e)| e.title()).collect();
        assert_eq!(titles, ["z", "y"]);
    }
}
