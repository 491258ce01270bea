//! Date annotations backing the inline event text of day cells.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::event::EventId;

/// Text and tags attached to one calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub date: NaiveDate,
    pub text: String,
    pub tags: Vec<String>,
}

/// Date -> annotations mapping consumed by the day-grid renderer
#[derive(Debug, Default)]
pub struct Annotations {
    by_id: HashMap<EventId, Annotation>,
    by_date: BTreeMap<NaiveDate, Vec<EventId>>,
    next_id: u64,
}

impl Annotations {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new annotation to `date` and return its id.
    ///
    /// Ids are never reused.
    pub fn create(&mut self, date: NaiveDate, text: impl Into<String>, tags: Vec<String>) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;

        self.by_id.insert(
            id,
            Annotation {
                date,
                text: text.into(),
                tags,
            },
        );
        self.by_date.entry(date).or_default().push(id);

        tracing::debug!("Annotated {} with {:?}", date, id);
        id
    }

    #[allow(dead_code)]
    pub fn get(&self, id: EventId) -> Option<&Annotation> {
        self.by_id.get(&id)
    }

    /// Annotations on `date`, oldest first
    pub fn on_date(&self, date: NaiveDate) -> impl Iterator<Item = &Annotation> {
        self.by_date
            .get(&date)
            .into_iter()
            .flatten()
            .filter_map(|id| self.by_id.get(id))
    }

    /// Tag deciding the style of a date's cell.
    ///
    /// The latest annotation with a non-empty tag list wins, and within it
    /// the last tag.
    pub fn style_tag(&self, date: NaiveDate) -> Option<&str> {
        let ids = self.by_date.get(&date)?;
        ids.iter()
            .rev()
            .filter_map(|id| self.by_id.get(id))
            .find_map(|a| a.tags.last())
            .map(String::as_str)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
