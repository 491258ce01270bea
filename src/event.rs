//! Calendar events and their categories.
//!
//! An [`Event`] is only ever built by the entry form after validation, and
//! never changes afterwards. The store pairs each event with the
//! [`EventId`] of its calendar annotation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Event category, also used as the annotation tag that picks a cell style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Exam,
    Homework,
    Quiz,
}

impl Category {
    /// All categories in the order the form cycles through them
    pub const ALL: [Category; 3] = [Category::Exam, Category::Homework, Category::Quiz];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exam => "Exam",
            Category::Homework => "Homework",
            Category::Quiz => "Quiz",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Category::Exam => Category::Homework,
            Category::Homework => Category::Quiz,
            Category::Quiz => Category::Exam,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Category::Exam => Category::Quiz,
            Category::Homework => Category::Exam,
            Category::Quiz => Category::Homework,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Opaque handle linking an event to its calendar annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub(crate) u64);

/// A dated academic event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    day: u32,
    month: u32,
    year: i32,
    title: String,
    category: Category,
}

impl Event {
    /// Build an event from an already validated date.
    pub fn new(date: NaiveDate, title: impl Into<String>, category: Category) -> Self {
        use chrono::Datelike;

        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
            title: title.into(),
            category,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Calendar date of the event.
    ///
    /// Always valid: the fields come from a `NaiveDate`.
    pub fn date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }

    /// Sort key used by the task list
    pub fn date_key(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}
