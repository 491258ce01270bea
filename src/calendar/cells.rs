//! Day cell contents: day number plus the inline event titles.

use chrono::Datelike;

use super::annotations::Annotations;
use super::grid::{DayCell, MonthGrid, DAYS, WEEKS};

/// What a single day cell displays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellView {
    /// Day number first, then one line per event title. Empty for blanks.
    pub lines: Vec<String>,
    pub is_weekend: bool,
    pub is_other_month: bool,
    /// Category tag selecting the cell style
    pub tag: Option<String>,
}

impl CellView {
    pub fn resolve(cell: &DayCell, annotations: &Annotations) -> Self {
        let Some(date) = cell.date else {
            return Self {
                is_weekend: cell.is_weekend,
                is_other_month: cell.is_other_month,
                ..Default::default()
            };
        };

        let mut lines = vec![date.day().to_string()];
        lines.extend(annotations.on_date(date).map(|a| a.text.clone()));

        Self {
            lines,
            is_weekend: cell.is_weekend,
            is_other_month: cell.is_other_month,
            tag: annotations.style_tag(date).map(str::to_string),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cell text as a single newline-joined string
    #[allow(dead_code)]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Resolve every cell of a month grid
pub fn resolve_month(grid: &MonthGrid, annotations: &Annotations) -> [[CellView; DAYS]; WEEKS] {
    std::array::from_fn(|w| std::array::from_fn(|d| CellView::resolve(&grid.cells[w][d], annotations)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::grid::GridOptions;
    use chrono::NaiveDate;

    fn ymd(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_plain_day_shows_number_only() {
        let grid = MonthGrid::build(2025, 3, &GridOptions::default()).unwrap();
        let views = resolve_month(&grid, &Annotations::new());

        assert_eq!(views[3][5].text(), "22");
        assert_eq!(views[3][5].tag, None);
        assert!(views[3][5].is_weekend);
    }

    #[test]
    fn test_events_inline_in_cell() {
        let mut ann = Annotations::new();
        ann.create(ymd(3, 22), "Midterm", vec!["Exam".into()]);
        ann.create(ymd(3, 22), "Problem set", vec!["Homework".into()]);

        let grid = MonthGrid::build(2025, 3, &GridOptions::default()).unwrap();
        let views = resolve_month(&grid, &ann);

        assert_eq!(views[3][5].text(), "22\nMidterm\nProblem set");
        assert_eq!(views[3][5].tag.as_deref(), Some("Homework"));
    }

    #[test]
    fn test_other_month_day_shows_events() {
        let mut ann = Annotations::new();
        ann.create(ymd(2, 24), "Quiz 3", vec!["Quiz".into()]);

        let grid = MonthGrid::build(2025, 3, &GridOptions::default()).unwrap();
        let views = resolve_month(&grid, &ann);

        assert!(views[0][0].is_other_month);
        assert_eq!(views[0][0].lines, ["24", "Quiz 3"]);
    }

    #[test]
    fn test_blank_cell() {
        let opts = GridOptions {
            show_other_month_days: false,
            ..Default::default()
        };
        let mut ann = Annotations::new();
        ann.create(ymd(2, 24), "Hidden", vec![]);

        let grid = MonthGrid::build(2025, 3, &opts).unwrap();
        let views = resolve_month(&grid, &ann);

        assert!(views[0][0].is_blank());
        assert_eq!(views[0][0].tag, None);
    }
}
