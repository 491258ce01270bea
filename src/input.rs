//! Crossterm key translation
//!
//! Maps a key press to an [`Action`] depending on what has focus: the top
//! dialog if any, otherwise the calendar or the sidebar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::{Action, Dialog, SidebarButton};
use crate::app::{App, Focus};
use crate::form::FormField;

/// Translate a key press into an action, if it means anything here
pub fn action_for_key(app: &App, key: &KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // Sidebar buttons stay reachable while windows are open
    match key.code {
        KeyCode::F(2) => return Some(Action::Press(SidebarButton::Tasks)),
        KeyCode::F(3) => return Some(Action::Press(SidebarButton::Reminders)),
        KeyCode::F(4) => return Some(Action::Press(SidebarButton::Quote)),
        _ => {}
    }

    match app.top_dialog() {
        Some(dialog) => dialog_action(dialog, key),
        None => match app.focus() {
            Focus::Calendar => calendar_action(key),
            Focus::Sidebar => sidebar_action(key),
        },
    }
}

fn calendar_action(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Left | KeyCode::Char('h') => Action::MoveDays(-1),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveDays(1),
        KeyCode::Up | KeyCode::Char('k') => Action::MoveDays(-7),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDays(7),
        KeyCode::PageUp | KeyCode::Char('p') | KeyCode::Char('[') => Action::ShiftMonth(-1),
        KeyCode::PageDown | KeyCode::Char('n') | KeyCode::Char(']') => Action::ShiftMonth(1),
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectDay,
        KeyCode::Char('a') => Action::NewEvent,
        KeyCode::Tab => Action::ToggleFocus,
        KeyCode::Char('t') => Action::Press(SidebarButton::Tasks),
        KeyCode::Char('r') => Action::Press(SidebarButton::Reminders),
        KeyCode::Char('o') => Action::Press(SidebarButton::Quote),
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn sidebar_action(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::SidebarMove(-1),
        KeyCode::Down | KeyCode::Char('j') => Action::SidebarMove(1),
        KeyCode::Enter | KeyCode::Char(' ') => Action::SidebarActivate,
        KeyCode::Tab | KeyCode::Left | KeyCode::Char('h') => Action::ToggleFocus,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn dialog_action(dialog: &Dialog, key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => return Some(Action::Close),
        KeyCode::Enter => return Some(Action::Confirm),
        KeyCode::Char('q') if !dialog.takes_text() && !is_message(dialog) => {
            return Some(Action::Close)
        }
        _ => {}
    }

    match dialog {
        Dialog::EventForm(form) => match (key.code, form.focus) {
            (KeyCode::Tab | KeyCode::BackTab, _) => Some(Action::SwitchField),
            (KeyCode::Char(c), FormField::Title) => Some(Action::TypeChar(c)),
            (KeyCode::Backspace, FormField::Title) => Some(Action::DeleteChar),
            (KeyCode::Left | KeyCode::Up, FormField::Category) => Some(Action::CycleCategory(-1)),
            (KeyCode::Right | KeyCode::Down | KeyCode::Char(' '), FormField::Category) => {
                Some(Action::CycleCategory(1))
            }
            _ => None,
        },
        Dialog::AddReminder { .. } => match key.code {
            KeyCode::Char(c) => Some(Action::TypeChar(c)),
            KeyCode::Backspace => Some(Action::DeleteChar),
            _ => None,
        },
        Dialog::Reminders => match key.code {
            KeyCode::Char('a') => Some(Action::AddReminder),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::RemoveReminder),
            _ => None,
        },
        Dialog::TaskList { .. } | Dialog::RemoveReminder { .. } => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Scroll(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Scroll(1)),
            _ => None,
        },
        // Any key dismisses message windows
        Dialog::Quote(_) | Dialog::Notice(_) => Some(Action::Confirm),
    }
}

fn is_message(dialog: &Dialog) -> bool {
    matches!(dialog, Dialog::Quote(_) | Dialog::Notice(_))
}
