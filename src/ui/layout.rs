//! Screen geometry
//!
//! Provides:
//! - Month grid geometry (week number column, 6x7 day cells)
//! - Centered dialog rectangles, offset per stack depth

use ratatui::layout::Rect;

use crate::calendar::grid::{DAYS, WEEKS};

/// Width of the week number column
pub const WEEK_COLUMN_WIDTH: u16 = 4;

/// Geometry of the month grid inside the calendar area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Area holding the day cells (below weekday headers)
    pub cells: Rect,
    pub cell_width: u16,
    pub cell_height: u16,
    /// Left edge of the day cells, after the week number column
    pub cells_x: u16,
}

impl GridLayout {
    /// Split `area` into a header row and 6 rows of 7 cells.
    ///
    /// Returns None when the area is too small to show anything.
    pub fn compute(area: Rect, week_numbers: bool) -> Option<Self> {
        let week_width = if week_numbers { WEEK_COLUMN_WIDTH } else { 0 };
        let width = area.width.saturating_sub(week_width);
        // One row for the weekday headers
        let height = area.height.saturating_sub(1);

        let cell_width = width / DAYS as u16;
        let cell_height = height / WEEKS as u16;
        if cell_width < 3 || cell_height == 0 {
            return None;
        }

        Some(Self {
            cells: Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width,
                height: cell_height * WEEKS as u16,
            },
            cell_width,
            cell_height,
            cells_x: area.x + week_width,
        })
    }

    /// Rectangle of the day cell at (week, day)
    pub fn cell(&self, week: usize, day: usize) -> Rect {
        Rect {
            x: self.cells_x + day as u16 * self.cell_width,
            y: self.cells.y + week as u16 * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Rectangle of the header above column `day`
    pub fn header(&self, day: usize) -> Rect {
        Rect {
            x: self.cells_x + day as u16 * self.cell_width,
            y: self.cells.y - 1,
            width: self.cell_width,
            height: 1,
        }
    }
}

/// Rectangle of `width` x `height` centered in `area`, shifted down-right by
/// `depth` so stacked dialogs stay visible
pub fn dialog_rect(area: Rect, width: u16, height: u16, depth: usize) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let offset = (depth as u16).saturating_mul(2);

    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let max_x = area.x + area.width - width;
    let max_y = area.y + area.height - height;

    Rect {
        x: (x + offset).min(max_x),
        y: (y + offset / 2).min(max_y),
        width,
        height,
    }
}
