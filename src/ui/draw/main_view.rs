//! Main screen drawing functions
//!
//! This module handles rendering the main window:
//! - Month calendar with inline events
//! - Sidebar buttons
//! - Status bar

use chrono::Month;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::SidebarButton;
use crate::app::{App, Focus};
use crate::ui::calendar_view::CalendarView;
use crate::ui::theme::Theme;

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 24;

pub(crate) fn draw_main_view(f: &mut Frame, app: &App, theme: &Theme) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Calendar + sidebar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SIDEBAR_WIDTH)])
        .split(rows[0]);

    draw_calendar(f, app, columns[0], theme);
    draw_sidebar(f, app, columns[1], theme);
    draw_status_bar(f, app, rows[1], theme);
}

fn draw_calendar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let Some(grid) = app.month_grid() else {
        return;
    };

    let month_name = u8::try_from(grid.month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("?");
    let border_color = if app.focus() == Focus::Calendar {
        theme.accent
    } else {
        theme.dimmed
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" ◀ {} {} ▶ ", month_name, grid.year))
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = app.grid_columns();
    let view = CalendarView::new(&grid, app.store().annotations(), columns, theme, |cell| {
        theme.cell_style(cell)
    })
    .cursor(Some(app.cursor()))
    .selected(app.selected())
    .week_numbers(app.show_week_numbers());
    f.render_widget(view, inner);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focus() == Focus::Sidebar;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { theme.accent } else { theme.dimmed }))
        .title(" Best Calendar ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, button) in SidebarButton::ALL.iter().enumerate() {
        let highlighted = focused && i == app.sidebar_index();
        let style = if highlighted {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground).bg(theme.background)
        };
        lines.push(Line::styled(format!(" [ {} ] ", button.label()), style));
        lines.push(Line::raw(""));
    }

    let count = app.store().len();
    lines.push(Line::styled(
        format!(" {} event{}", count, if count == 1 { "" } else { "s" }),
        Style::default().fg(theme.dimmed),
    ));

    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let status = match app.focus() {
        Focus::Calendar => {
            " ←↑↓→: move | Enter: add event | [/]: month | t/r/o: tasks, reminders, quote | Tab: sidebar | q: quit"
        }
        Focus::Sidebar => " ↑↓: choose | Enter: open | Tab: calendar | q: quit",
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(theme.dimmed).bg(theme.background));
    f.render_widget(status_bar, area);
}
