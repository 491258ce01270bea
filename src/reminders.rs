//! Free-text reminders, kept for the lifetime of the process.

/// Label text when the list is empty
pub const NO_REMINDERS: &str = "No reminders yet";

/// Notice shown when removal is attempted on an empty list
pub const NOTHING_TO_REMOVE: &str = "There are no reminders to remove.";

/// Insertion-ordered reminder list with a cached display label
#[derive(Debug, Clone)]
pub struct Reminders {
    items: Vec<String>,
    label: String,
}

impl Default for Reminders {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            label: NO_REMINDERS.to_string(),
        }
    }
}

impl Reminders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` unless it is blank. Returns whether it was added.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.items.push(text.to_string());
        self.refresh_label();
        true
    }

    /// Remove the first reminder equal to `text`. Returns whether one was removed.
    pub fn remove(&mut self, text: &str) -> bool {
        let Some(pos) = self.items.iter().position(|r| r == text) else {
            return false;
        };
        self.items.remove(pos);
        self.refresh_label();
        true
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Display label, refreshed on every change
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn refresh_label(&mut self) {
        self.label = if self.items.is_empty() {
            NO_REMINDERS.to_string()
        } else {
            self.items
                .iter()
                .map(|r| format!("• {r}"))
                .collect::<Vec<_>>()
                .join("\n")
        };
    }
}
