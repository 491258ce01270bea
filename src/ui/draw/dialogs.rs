//! Dialog drawing functions
//!
//! Every open dialog is drawn as a bordered window over the main screen,
//! bottom of the stack first, each one offset a little from the previous.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::action::{Dialog, NoticeKind};
use crate::app::App;
use crate::event::Category;
use crate::form::{EventForm, FormField};
use crate::reminders::Reminders;
use crate::ui::layout::dialog_rect;
use crate::ui::theme::Theme;

pub(crate) fn draw_dialogs(f: &mut Frame, app: &App, theme: &Theme) {
    let count = app.dialogs().len();
    for (depth, dialog) in app.dialogs().iter().enumerate() {
        let focused = depth + 1 == count;
        draw_dialog(f, app, dialog, depth, focused, theme);
    }
}

fn draw_dialog(f: &mut Frame, app: &App, dialog: &Dialog, depth: usize, focused: bool, theme: &Theme) {
    let (width, height) = dialog_size(dialog, app.reminders());
    let area = dialog_rect(f.area(), width, height, depth);

    let border_color = match dialog {
        Dialog::Notice(n) if n.kind == NoticeKind::Error => theme.error,
        _ if focused => theme.accent,
        _ => theme.dimmed,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", dialog.title()))
        .style(Style::default().fg(theme.foreground).bg(theme.background));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    match dialog {
        Dialog::EventForm(form) => draw_event_form(f, form, inner, focused, theme),
        Dialog::TaskList { text, scroll } => {
            let body = Paragraph::new(text.as_str()).scroll((*scroll, 0));
            draw_with_hint(f, body, inner, "↑↓: scroll | Esc: close", theme);
        }
        Dialog::Reminders => {
            let body = Paragraph::new(app.reminders().label()).wrap(Wrap { trim: false });
            draw_with_hint(f, body, inner, "a: add | d: remove | Esc: close", theme);
        }
        Dialog::AddReminder { input } => {
            let body = Paragraph::new(vec![
                Line::raw("Reminder:"),
                Line::styled(format!("> {input}"), Style::default().fg(theme.accent)),
            ]);
            draw_with_hint(f, body, inner, "Enter: add | Esc: cancel", theme);
            if focused {
                let x = inner.x + 2 + input.width() as u16;
                f.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + 1));
            }
        }
        Dialog::RemoveReminder { selected } => {
            let lines: Vec<Line> = app
                .reminders()
                .items()
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    if i == *selected {
                        Line::styled(
                            format!("● {r}"),
                            Style::default()
                                .fg(theme.selection_fg)
                                .bg(theme.selection_bg)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Line::raw(format!("  {r}"))
                    }
                })
                .collect();
            let scroll = (*selected as u16).saturating_sub(inner.height.saturating_sub(2));
            let body = Paragraph::new(lines).scroll((scroll, 0));
            draw_with_hint(f, body, inner, "↑↓: choose | Enter: remove | Esc: cancel", theme);
        }
        Dialog::Quote(quote) => {
            let body = Paragraph::new(*quote)
                .style(Style::default().add_modifier(Modifier::ITALIC))
                .wrap(Wrap { trim: true });
            draw_with_hint(f, body, inner, "any key: close", theme);
        }
        Dialog::Notice(notice) => {
            let body = Paragraph::new(notice.message.as_str()).wrap(Wrap { trim: true });
            draw_with_hint(f, body, inner, "any key: OK", theme);
        }
    }
}

/// Window size for a dialog, including borders
fn dialog_size(dialog: &Dialog, reminders: &Reminders) -> (u16, u16) {
    match dialog {
        Dialog::EventForm(_) => (44, 11),
        Dialog::TaskList { text, .. } => (44, (text.lines().count() as u16 + 3).clamp(6, 24)),
        Dialog::Reminders => (48, (reminders.len() as u16 + 3).clamp(6, 20)),
        Dialog::AddReminder { .. } => (48, 6),
        Dialog::RemoveReminder { .. } => (48, (reminders.len() as u16 + 3).clamp(5, 16)),
        Dialog::Quote(_) => (56, 8),
        Dialog::Notice(_) => (44, 6),
    }
}

/// Render `body` with a dimmed key hint on the last inner line
fn draw_with_hint(f: &mut Frame, body: Paragraph, inner: Rect, hint: &str, theme: &Theme) {
    if inner.height == 0 {
        return;
    }
    let body_area = Rect {
        height: inner.height - 1,
        ..inner
    };
    let hint_area = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };

    f.render_widget(body, body_area);
    f.render_widget(
        Paragraph::new(hint).style(Style::default().fg(theme.dimmed)),
        hint_area,
    );
}

fn draw_event_form(f: &mut Frame, form: &EventForm, inner: Rect, focused: bool, theme: &Theme) {
    let field_style = |field: FormField| {
        if form.focus == field {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        }
    };

    let categories: Vec<Span> = Category::ALL
        .iter()
        .flat_map(|c| {
            let style = if *c == form.category {
                field_style(FormField::Category).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(theme.dimmed)
            };
            [Span::styled(format!(" {c} "), style), Span::raw(" ")]
        })
        .collect();

    let date = form.selection().unwrap_or("(no date selected)");
    let lines = vec![
        Line::styled(format!("Date: {date}"), Style::default().fg(theme.dimmed)),
        Line::raw(""),
        Line::styled("Event Title:", field_style(FormField::Title)),
        Line::raw(format!("> {}", form.title)),
        Line::raw(""),
        Line::styled("Event Type:", field_style(FormField::Category)),
        Line::from(categories),
    ];

    draw_with_hint(
        f,
        Paragraph::new(lines),
        inner,
        "Tab: field | ←→: type | Enter: add | Esc: cancel",
        theme,
    );

    if focused && form.focus == FormField::Title {
        let x = inner.x + 2 + form.title.width() as u16;
        f.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + 3));
    }
}
