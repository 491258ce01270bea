//! Event entry form state and validation.

use crate::event::{Category, Event};
use crate::selection::{parse_selection, DateParseError};

/// Validation failures on submit
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a title for the event.")]
    EmptyTitle,
    #[error("Please select a date first.")]
    NoDateSelected,
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateParseError),
}

/// Which input has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Category,
}

/// An open "Add Event" form bound to one selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    selection: Option<String>,
    pub title: String,
    pub category: Category,
    pub focus: FormField,
}

impl EventForm {
    pub fn new(selection: Option<String>) -> Self {
        Self {
            selection,
            ..Default::default()
        }
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Category => {}
        }
    }

    pub fn pop_char(&mut self) {
        if self.focus == FormField::Title {
            self.title.pop();
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Category,
            FormField::Category => FormField::Title,
        };
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn previous_category(&mut self) {
        self.category = self.category.previous();
    }

    /// Validate the inputs and build the event
    pub fn submit(&self) -> Result<Event, FormError> {
        let selection = self.selection.as_deref().ok_or(FormError::NoDateSelected)?;
        if self.title.is_empty() {
            return Err(FormError::EmptyTitle);
        }
        let date = parse_selection(selection)?;
        Ok(Event::new(date, self.title.clone(), self.category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form_with(selection: &str, title: &str) -> EventForm {
        let mut form = EventForm::new(Some(selection.to_string()));
        title.chars().for_each(|c| form.push_char(c));
        form
    }

    #[test]
    fn test_submit_builds_event() {
        let mut form = form_with("03/22/25", "Midterm");
        form.toggle_focus();
        form.next_category();

        let event = form.submit().unwrap();
        assert_eq!(event.date(), NaiveDate::from_ymd_opt(2025, 3, 22).unwrap());
        assert_eq!(event.title(), "Midterm");
        assert_eq!(event.category(), Category::Homework);
    }

    #[test]
    fn test_default_category_is_exam() {
        assert_eq!(form_with("01/01/25", "x").submit().unwrap().category(), Category::Exam);
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(form_with("03/22/25", "").submit(), Err(FormError::EmptyTitle));
    }

    #[test]
    fn test_no_selection() {
        let mut form = EventForm::new(None);
        form.push_char('x');
        assert_eq!(form.submit(), Err(FormError::NoDateSelected));
    }

    #[test]
    fn test_invalid_date_reports_parse_message() {
        let err = form_with("13/40/25", "x").submit().unwrap_err();
        assert!(matches!(err, FormError::InvalidDate(_)));
        assert_eq!(err.to_string(), "Invalid date: 13/40/2025 is not a calendar date");
    }

    #[test]
    fn test_typing_ignored_on_category_field() {
        let mut form = form_with("03/22/25", "ab");
        form.toggle_focus();
        form.push_char('c');
        form.pop_char();
        assert_eq!(form.title, "ab");

        form.toggle_focus();
        form.pop_char();
        assert_eq!(form.title, "a");
    }
}
