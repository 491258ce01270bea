//! Month calendar widget
//!
//! Renders a [`MonthGrid`] with each day's event titles printed inside the
//! day cell, one per line below the day number. Cell styles come from an
//! injected resolver so the widget knows nothing about categories.

use chrono::{NaiveDate, Weekday};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::calendar::grid::{DAYS, WEEKS};
use crate::calendar::{resolve_month, Annotations, CellView, MonthGrid};
use super::layout::GridLayout;
use super::theme::Theme;

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Calendar widget
pub struct CalendarView<'a, F>
where
    F: Fn(&CellView) -> Style,
{
    grid: &'a MonthGrid,
    annotations: &'a Annotations,
    style_for: F,
    columns: [Weekday; DAYS],
    theme: &'a Theme,
    cursor: Option<NaiveDate>,
    selected: Option<NaiveDate>,
    week_numbers: bool,
}

impl<'a, F> CalendarView<'a, F>
where
    F: Fn(&CellView) -> Style,
{
    pub fn new(
        grid: &'a MonthGrid,
        annotations: &'a Annotations,
        columns: [Weekday; DAYS],
        theme: &'a Theme,
        style_for: F,
    ) -> Self {
        Self {
            grid,
            annotations,
            style_for,
            columns,
            theme,
            cursor: None,
            selected: None,
            week_numbers: true,
        }
    }

    pub fn cursor(mut self, cursor: Option<NaiveDate>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn selected(mut self, selected: Option<NaiveDate>) -> Self {
        self.selected = selected;
        self
    }

    pub fn week_numbers(mut self, show: bool) -> Self {
        self.week_numbers = show;
        self
    }
}

impl<'a, F> Widget for CalendarView<'a, F>
where
    F: Fn(&CellView) -> Style,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = GridLayout::compute(area, self.week_numbers) else {
            return;
        };

        let header_style = Style::default()
            .fg(self.theme.accent)
            .bg(self.theme.background)
            .add_modifier(Modifier::BOLD);
        for (d, weekday) in self.columns.iter().enumerate() {
            let rect = layout.header(d);
            let name = WEEKDAY_NAMES[weekday.num_days_from_monday() as usize];
            let x = rect.x + rect.width.saturating_sub(name.width() as u16) / 2;
            buf.set_string(x, rect.y, name, header_style);
        }

        let views = resolve_month(self.grid, self.annotations);
        let week_style = Style::default().fg(self.theme.dimmed).bg(self.theme.background);

        for w in 0..WEEKS {
            if self.week_numbers {
                if let Some(n) = self.grid.week_numbers[w] {
                    let y = layout.cell(w, 0).y;
                    buf.set_string(area.x, y, format!("{n:>2}"), week_style);
                }
            }

            for d in 0..DAYS {
                let date = self.grid.cells[w][d].date;
                let mut style = (self.style_for)(&views[w][d]);
                if date.is_some() && date == self.selected {
                    style = style.fg(self.theme.accent).add_modifier(Modifier::UNDERLINED);
                }
                if date.is_some() && date == self.cursor {
                    style = style.bg(self.theme.selection_bg).add_modifier(Modifier::REVERSED);
                }
                render_cell(&views[w][d], layout.cell(w, d), style, buf);
            }
        }
    }
}

/// Fill a day cell and print its lines, centered, from the top
fn render_cell(view: &CellView, area: Rect, style: Style, buf: &mut Buffer) {
    // Keep one column free as a gutter between cells
    let inner_width = area.width.saturating_sub(1);
    if inner_width == 0 || area.height == 0 {
        return;
    }

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + inner_width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(style);
            }
        }
    }

    if view.is_blank() {
        return;
    }

    for (i, line) in view.lines.iter().take(area.height as usize).enumerate() {
        let text = truncate(line, inner_width as usize);
        let x = area.x + (inner_width.saturating_sub(text.width() as u16)) / 2;
        buf.set_string(x, area.y + i as u16, text, style);
    }
}

/// Truncate string to fit within max_width, adding ellipsis if needed
fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width <= 1 {
        "…".to_string()
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::GridOptions;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(annotations: &Annotations, theme: &Theme) -> Buffer {
        let opts = GridOptions::default();
        let grid = MonthGrid::build(2025, 3, &opts).unwrap();
        let area = Rect::new(0, 0, 74, 25);
        let mut buf = Buffer::empty(area);
        CalendarView::new(&grid, annotations, opts.columns(), theme, |c| theme.cell_style(c))
            .render(area, &mut buf);
        buf
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("hello", 1), "…");
    }

    #[test]
    fn test_headers_and_week_numbers() {
        let theme = Theme::default();
        let buf = render(&Annotations::new(), &theme);

        let header = row_text(&buf, 0);
        assert!(header.contains("Mon"));
        assert!(header.find("Mon") < header.find("Sun"));
        assert!(row_text(&buf, 1).starts_with(" 9"));
    }

    #[test]
    fn test_event_titles_inline() {
        let theme = Theme::default();
        let mut ann = Annotations::new();
        let date = NaiveDate::from_ymd_opt(2025, 3, 22).unwrap();
        ann.create(date, "Midterm", vec!["Exam".into()]);
        ann.create(date, "Reading", vec![]);

        let buf = render(&ann, &theme);

        // 22 March is week row 3, Saturday column 5: cell x = 4 + 50, y = 1 + 12
        let (x, y) = (54u16, 13u16);
        assert!(row_text(&buf, y)[x as usize..].starts_with("   22"));
        assert!(row_text(&buf, y + 1).contains("Midterm"));
        assert!(row_text(&buf, y + 2).contains("Reading"));
        assert_eq!(buf[(x, y)].bg, theme.exam);
    }

    #[test]
    fn test_custom_style_resolver() {
        let theme = Theme::default();
        let opts = GridOptions::default();
        let grid = MonthGrid::build(2025, 3, &opts).unwrap();
        let area = Rect::new(0, 0, 74, 25);
        let mut buf = Buffer::empty(area);
        let plain = Style::default().bg(ratatui::style::Color::Blue);

        CalendarView::new(&grid, &Annotations::new(), opts.columns(), &theme, |_| plain)
            .week_numbers(false)
            .render(area, &mut buf);

        assert_eq!(buf[(0, 1)].bg, ratatui::style::Color::Blue);
    }

    #[test]
    fn test_too_small_area_draws_nothing() {
        let theme = Theme::default();
        let opts = GridOptions::default();
        let grid = MonthGrid::build(2025, 3, &opts).unwrap();
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        CalendarView::new(&grid, &Annotations::new(), opts.columns(), &theme, |c| theme.cell_style(c))
            .render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
