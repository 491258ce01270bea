use chrono::{Datelike, Days, Months, NaiveDate};

use crate::action::{Action, Dialog, Effect, Notice, SidebarButton};
use crate::calendar::{GridOptions, MonthGrid};
use crate::config::Config;
use crate::form::EventForm;
use crate::quotes;
use crate::reminders::{Reminders, NOTHING_TO_REMOVE};
use crate::selection::{clamp_selectable, format_selection, is_selectable};
use crate::store::EventStore;
use crate::tasks::render_task_list;
use crate::ui::theme::Theme;

/// Which part of the main screen has keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Calendar,
    Sidebar,
}

/// Application state
pub struct App {
    /// Events and their calendar annotations
    store: EventStore,
    /// Reminder list, alive for the whole session
    reminders: Reminders,
    /// Open windows, top of stack last
    dialogs: Vec<Dialog>,
    /// Day under the keyboard cursor; its month is the displayed month
    cursor: NaiveDate,
    /// Last day the user selected
    selected: Option<NaiveDate>,
    focus: Focus,
    sidebar_index: usize,
    grid_options: GridOptions,
    show_week_numbers: bool,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, initial: NaiveDate) -> Self {
        let cursor = clamp_selectable(initial);
        if cursor != initial {
            tracing::warn!("{} cannot be selected, opening on {}", initial, cursor);
        }

        Self {
            store: EventStore::new(),
            reminders: Reminders::new(),
            dialogs: Vec::new(),
            cursor,
            selected: None,
            focus: Focus::Calendar,
            sidebar_index: 0,
            grid_options: config.grid_options(),
            show_week_numbers: config.calendar.show_week_numbers,
            theme: config.resolve_theme(),
            should_quit: false,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn reminders(&self) -> &Reminders {
        &self.reminders
    }

    pub fn dialogs(&self) -> &[Dialog] {
        &self.dialogs
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialogs.last()
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn sidebar_index(&self) -> usize {
        self.sidebar_index
    }

    pub fn show_week_numbers(&self) -> bool {
        self.show_week_numbers
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Weekdays in calendar column order
    pub fn grid_columns(&self) -> [chrono::Weekday; 7] {
        self.grid_options.columns()
    }

    /// Grid of the displayed month
    pub fn month_grid(&self) -> Option<MonthGrid> {
        MonthGrid::build(self.cursor.year(), self.cursor.month(), &self.grid_options)
    }

    /// Update state for `action` and describe the resulting side effect
    pub fn handle(&mut self, action: Action) -> Effect {
        tracing::trace!("Action {:?}", action);
        match action {
            Action::Quit => Effect::Quit,
            Action::Close => {
                if self.dialogs.is_empty() {
                    Effect::Quit
                } else {
                    Effect::CloseTop
                }
            }
            Action::MoveDays(n) => {
                self.move_cursor_days(n);
                Effect::None
            }
            Action::ShiftMonth(n) => {
                self.shift_month(n);
                Effect::None
            }
            Action::SelectDay => self.select_day(),
            Action::NewEvent => {
                let selection = self.selected.map(format_selection);
                Effect::Open(Dialog::EventForm(EventForm::new(selection)))
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Calendar => Focus::Sidebar,
                    Focus::Sidebar => Focus::Calendar,
                };
                Effect::None
            }
            Action::SidebarMove(n) => {
                let last = SidebarButton::ALL.len() as i64 - 1;
                self.sidebar_index = (self.sidebar_index as i64 + n as i64).clamp(0, last) as usize;
                Effect::None
            }
            Action::SidebarActivate => self.press(SidebarButton::ALL[self.sidebar_index]),
            Action::Press(button) => self.press(button),
            Action::AddReminder => Effect::Open(Dialog::AddReminder {
                input: String::new(),
            }),
            Action::RemoveReminder => {
                if self.reminders.is_empty() {
                    Effect::Notice(Notice::info(NOTHING_TO_REMOVE))
                } else {
                    Effect::Open(Dialog::RemoveReminder { selected: 0 })
                }
            }
            Action::Confirm => self.confirm(),
            Action::TypeChar(c) => {
                match self.dialogs.last_mut() {
                    Some(Dialog::EventForm(form)) => form.push_char(c),
                    Some(Dialog::AddReminder { input }) => input.push(c),
                    _ => {}
                }
                Effect::None
            }
            Action::DeleteChar => {
                match self.dialogs.last_mut() {
                    Some(Dialog::EventForm(form)) => form.pop_char(),
                    Some(Dialog::AddReminder { input }) => {
                        input.pop();
                    }
                    _ => {}
                }
                Effect::None
            }
            Action::SwitchField => {
                if let Some(Dialog::EventForm(form)) = self.dialogs.last_mut() {
                    form.toggle_focus();
                }
                Effect::None
            }
            Action::CycleCategory(n) => {
                if let Some(Dialog::EventForm(form)) = self.dialogs.last_mut() {
                    if n < 0 {
                        form.previous_category();
                    } else {
                        form.next_category();
                    }
                }
                Effect::None
            }
            Action::Scroll(n) => {
                let count = self.reminders.len();
                match self.dialogs.last_mut() {
                    Some(Dialog::TaskList { text, scroll }) => {
                        let max = text.lines().count().saturating_sub(1) as i64;
                        *scroll = (*scroll as i64 + n as i64).clamp(0, max) as u16;
                    }
                    Some(Dialog::RemoveReminder { selected }) => {
                        let max = count.saturating_sub(1) as i64;
                        *selected = (*selected as i64 + n as i64).clamp(0, max) as usize;
                    }
                    _ => {}
                }
                Effect::None
            }
        }
    }

    /// Carry out an effect returned by [`App::handle`]
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Open(Dialog::Reminders) => {
                if let Some(pos) = self.dialogs.iter().position(|d| *d == Dialog::Reminders) {
                    tracing::debug!("Reminder manager already open, raising it");
                    let dialog = self.dialogs.remove(pos);
                    self.dialogs.push(dialog);
                } else {
                    self.dialogs.push(Dialog::Reminders);
                }
            }
            Effect::Open(dialog) => {
                tracing::debug!("Opening {}", dialog.title());
                self.dialogs.push(dialog);
            }
            Effect::Notice(notice) => self.dialogs.push(Dialog::Notice(notice)),
            Effect::CloseTop => {
                self.dialogs.pop();
            }
            Effect::Quit => self.should_quit = true,
        }
    }

    /// Handle and apply in one step
    pub fn dispatch(&mut self, action: Action) {
        let effect = self.handle(action);
        self.apply(effect);
    }

    fn move_cursor_days(&mut self, n: i64) {
        let days = Days::new(n.unsigned_abs());
        let moved = if n < 0 {
            self.cursor.checked_sub_days(days)
        } else {
            self.cursor.checked_add_days(days)
        };
        if let Some(date) = moved.filter(|d| is_selectable(*d)) {
            self.cursor = date;
        }
    }

    fn shift_month(&mut self, n: i32) {
        // chrono clamps the day to the end of shorter months
        let months = Months::new(n.unsigned_abs());
        let moved = if n < 0 {
            self.cursor.checked_sub_months(months)
        } else {
            self.cursor.checked_add_months(months)
        };
        if let Some(date) = moved.filter(|d| is_selectable(*d)) {
            self.cursor = date;
        }
    }

    /// Fire the selection notification and open the form bound to it
    fn select_day(&mut self) -> Effect {
        self.selected = Some(self.cursor);
        let selection = format_selection(self.cursor);
        tracing::debug!("Selected {}", selection);
        Effect::Open(Dialog::EventForm(EventForm::new(Some(selection))))
    }

    fn press(&mut self, button: SidebarButton) -> Effect {
        match button {
            SidebarButton::Tasks => Effect::Open(Dialog::TaskList {
                text: render_task_list(self.store.get_events()),
                scroll: 0,
            }),
            SidebarButton::Reminders => Effect::Open(Dialog::Reminders),
            SidebarButton::Quote => Effect::Open(Dialog::Quote(quotes::pick(&mut rand::thread_rng()))),
        }
    }

    fn confirm(&mut self) -> Effect {
        match self.dialogs.last() {
            None => self.select_day(),
            Some(Dialog::EventForm(form)) => match form.submit() {
                Ok(event) => {
                    self.store.add_event(event);
                    Effect::CloseTop
                }
                Err(e) => {
                    tracing::debug!("Event form rejected: {}", e);
                    Effect::Notice(Notice::error(e.to_string()))
                }
            },
            Some(Dialog::AddReminder { input }) => {
                let input = input.clone();
                if !self.reminders.add(&input) {
                    tracing::debug!("Ignoring blank reminder");
                }
                Effect::CloseTop
            }
            Some(Dialog::RemoveReminder { selected }) => {
                if let Some(text) = self.reminders.items().get(*selected).cloned() {
                    self.reminders.remove(&text);
                }
                Effect::CloseTop
            }
            Some(Dialog::Reminders) => Effect::None,
            Some(Dialog::TaskList { .. } | Dialog::Quote(_) | Dialog::Notice(_)) => Effect::CloseTop,
        }
    }
}
