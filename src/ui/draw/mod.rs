//! Drawing functions for the TUI
//!
//! This module contains all rendering logic:
//! - `main_view` - Calendar, sidebar and status bar
//! - `dialogs` - Stacked dialog windows

mod dialogs;
mod main_view;

use ratatui::Frame;

use crate::app::App;

use dialogs::draw_dialogs;
use main_view::draw_main_view;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();
    draw_main_view(f, app, theme);
    draw_dialogs(f, app, theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, SidebarButton};
    use crate::config::Config;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 34)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_main_screen() {
        let app = App::new(&Config::default(), NaiveDate::from_ymd_opt(2025, 3, 22).unwrap());
        let text = render(&app);

        assert!(text.contains("March 2025"));
        assert!(text.contains("[ Tasks ]"));
        assert!(text.contains("[ Reminders ]"));
        assert!(text.contains("[ Quote of the Day ]"));
        assert!(text.contains("0 events"));
    }

    #[test]
    fn test_event_appears_in_calendar_and_task_list() {
        let mut app = App::new(&Config::default(), NaiveDate::from_ymd_opt(2025, 3, 22).unwrap());
        app.dispatch(Action::SelectDay);
        for c in "Midterm".chars() {
            app.dispatch(Action::TypeChar(c));
        }
        app.dispatch(Action::Confirm);

        let text = render(&app);
        assert!(text.contains("Midterm"));
        assert!(text.contains("1 event"));

        app.dispatch(Action::Press(SidebarButton::Tasks));
        let text = render(&app);
        assert!(text.contains("Name: Midterm"));
        assert!(text.contains("Date: 3/22/2025"));
    }
}
