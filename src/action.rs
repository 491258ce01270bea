//! User actions, dialogs and the effects handlers return.
//!
//! # Data flow
//!
//! ```text
//! crossterm key
//!      │  input::action_for_key
//!      ▼
//!   Action
//!      │  App::handle  (updates state)
//!      ▼
//!   Effect
//!      │  App::apply   (dialog stack / quit)
//!      ▼
//!   next frame
//! ```
//!
//! Handlers never touch the dialog stack directly; opening, raising and
//! closing windows is expressed as an [`Effect`] so it can be asserted on
//! in tests without a terminal.

use crate::form::EventForm;

/// Sidebar buttons, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarButton {
    Tasks,
    Reminders,
    Quote,
}

impl SidebarButton {
    pub const ALL: [SidebarButton; 3] = [
        SidebarButton::Tasks,
        SidebarButton::Reminders,
        SidebarButton::Quote,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SidebarButton::Tasks => "Tasks",
            SidebarButton::Reminders => "Reminders",
            SidebarButton::Quote => "Quote of the Day",
        }
    }
}

/// Everything the user can do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the calendar cursor by a number of days
    MoveDays(i64),
    /// Show the previous (-1) or next (+1) month
    ShiftMonth(i32),
    /// Select the day under the cursor; opens the entry form
    SelectDay,
    /// Open the entry form for the current selection (which may be unset)
    NewEvent,
    /// Switch keyboard focus between calendar and sidebar
    ToggleFocus,
    /// Move the sidebar highlight
    SidebarMove(i32),
    /// Activate the highlighted sidebar button
    SidebarActivate,
    /// Press a sidebar button directly
    Press(SidebarButton),
    /// Text input for the top dialog
    TypeChar(char),
    DeleteChar,
    /// Switch between form fields
    SwitchField,
    /// Cycle the form's category
    CycleCategory(i32),
    /// Scroll the task list or move the reminder picker
    Scroll(i32),
    /// Open the add-reminder prompt from the reminder manager
    AddReminder,
    /// Open the remove-reminder picker from the reminder manager
    RemoveReminder,
    /// Submit / confirm / dismiss the top dialog
    Confirm,
    /// Close the top dialog, discarding its input
    Close,
    Quit,
}

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Info",
            NoticeKind::Error => "Error",
        }
    }
}

/// A window on the dialog stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    EventForm(EventForm),
    /// Task list text is rendered when the window opens
    TaskList { text: String, scroll: u16 },
    /// Reminder manager; at most one on the stack
    Reminders,
    AddReminder { input: String },
    RemoveReminder { selected: usize },
    Quote(&'static str),
    Notice(Notice),
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::EventForm(_) => "Add Event",
            Dialog::TaskList { .. } => "Tasks",
            Dialog::Reminders => "Reminders",
            Dialog::AddReminder { .. } => "Add Reminder",
            Dialog::RemoveReminder { .. } => "Remove Reminder",
            Dialog::Quote(_) => "Quote of the Day",
            Dialog::Notice(n) => n.title(),
        }
    }

    /// Whether printable keys go to a text field
    pub fn takes_text(&self) -> bool {
        match self {
            Dialog::EventForm(form) => form.focus == crate::form::FormField::Title,
            Dialog::AddReminder { .. } => true,
            _ => false,
        }
    }
}

/// Side effect requested by a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Push a dialog; the reminder manager is raised instead if already open
    Open(Dialog),
    /// Show a message box above the current dialogs
    Notice(Notice),
    /// Close the top dialog
    CloseTop,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_labels() {
        let labels: Vec<_> = SidebarButton::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels, ["Tasks", "Reminders", "Quote of the Day"]);
    }

    #[test]
    fn test_takes_text() {
        let mut form = EventForm::new(None);
        assert!(Dialog::EventForm(form.clone()).takes_text());
        form.toggle_focus();
        assert!(!Dialog::EventForm(form).takes_text());
        assert!(Dialog::AddReminder { input: String::new() }.takes_text());
        assert!(!Dialog::Reminders.takes_text());
    }

    #[test]
    fn test_notice_titles() {
        assert_eq!(Notice::info("x").title(), "Info");
        assert_eq!(Notice::error("x").title(), "Error");
        assert_eq!(Dialog::Notice(Notice::error("x")).title(), "Error");
    }
}
