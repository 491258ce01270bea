//! Month grid layout: 6 weeks of 7 days.
//!
//! Row 0 starts on the first weekday on or before the 1st of the month, so
//! the grid always covers 42 consecutive dates. Days outside the month are
//! either shown (dimmed) or blanked, depending on [`GridOptions`].

use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const WEEKS: usize = 6;
pub const DAYS: usize = 7;

/// Options mirroring the calendar display settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    pub first_weekday: Weekday,
    pub weekend_days: Vec<Weekday>,
    pub show_other_month_days: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            first_weekday: Weekday::Mon,
            weekend_days: vec![Weekday::Sat, Weekday::Sun],
            show_other_month_days: true,
        }
    }
}

impl GridOptions {
    /// Weekdays in column order
    pub fn columns(&self) -> [Weekday; DAYS] {
        let mut days = [self.first_weekday; DAYS];
        for i in 1..DAYS {
            days[i] = days[i - 1].succ();
        }
        days
    }
}

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// None for blanked other-month days
    pub date: Option<NaiveDate>,
    pub is_weekend: bool,
    pub is_other_month: bool,
}

/// A laid out month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: [[DayCell; DAYS]; WEEKS],
    pub week_numbers: [Option<u32>; WEEKS],
}

impl MonthGrid {
    /// Lay out `month` of `year`.
    ///
    /// Returns None if the month does not exist.
    pub fn build(year: i32, month: u32, options: &GridOptions) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let lead = (first.weekday().num_days_from_monday() + 7
            - options.first_weekday.num_days_from_monday())
            % 7;
        let start = first.checked_sub_days(Days::new(lead as u64))?;
        let columns = options.columns();

        let blank = DayCell {
            date: None,
            is_weekend: false,
            is_other_month: false,
        };
        let mut cells = [[blank; DAYS]; WEEKS];
        let mut week_numbers = [None; WEEKS];

        for (w, row) in cells.iter_mut().enumerate() {
            let mut has_in_month = false;
            let mut monday = None;

            for (d, cell) in row.iter_mut().enumerate() {
                let date = start.checked_add_days(Days::new((w * DAYS + d) as u64))?;
                let in_month = date.month() == month;
                has_in_month |= in_month;
                if date.weekday() == Weekday::Mon {
                    monday = Some(date);
                }

                *cell = DayCell {
                    date: (in_month || options.show_other_month_days).then_some(date),
                    is_weekend: options.weekend_days.contains(&columns[d]),
                    is_other_month: !in_month,
                };
            }

            if w == 0 || has_in_month || options.show_other_month_days {
                // Sunday-first rows contain their Monday at column 1
                week_numbers[w] = monday.map(|m| m.iso_week().week());
            }
        }

        Some(Self {
            year,
            month,
            cells,
            week_numbers,
        })
    }

    /// Grid position of `date`, if it is displayed
    #[allow(dead_code)]
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(w, row)| {
            row.iter()
                .position(|c| c.date == Some(date))
                .map(|d| (w, d))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_columns_follow_first_weekday() {
        let opts = GridOptions {
            first_weekday: Weekday::Sun,
            ..Default::default()
        };
        let cols = opts.columns();
        assert_eq!(cols[0], Weekday::Sun);
        assert_eq!(cols[6], Weekday::Sat);
    }

    #[test]
    fn test_march_2025_monday_first() {
        // 1 March 2025 is a Saturday
        let grid = MonthGrid::build(2025, 3, &GridOptions::default()).unwrap();

        assert_eq!(grid.cells[0][0].date, Some(ymd(2025, 2, 24)));
        assert!(grid.cells[0][0].is_other_month);
        assert_eq!(grid.cells[0][5].date, Some(ymd(2025, 3, 1)));
        assert!(!grid.cells[0][5].is_other_month);
        assert!(grid.cells[0][5].is_weekend);
        assert!(!grid.cells[0][4].is_weekend);
        assert_eq!(grid.cells[5][6].date, Some(ymd(2025, 4, 6)));
        assert_eq!(grid.position_of(ymd(2025, 3, 22)), Some((3, 5)));
    }

    #[test]
    fn test_hidden_other_month_days() {
        let opts = GridOptions {
            show_other_month_days: false,
            ..Default::default()
        };
        let grid = MonthGrid::build(2025, 3, &opts).unwrap();

        assert_eq!(grid.cells[0][0].date, None);
        assert_eq!(grid.cells[0][5].date, Some(ymd(2025, 3, 1)));
        assert_eq!(grid.cells[5][0].date, Some(ymd(2025, 3, 31)));
        assert_eq!(grid.cells[5][1].date, None);
        assert_eq!(grid.position_of(ymd(2025, 2, 24)), None);
    }

    #[test]
    fn test_month_starting_on_first_weekday() {
        // 1 September 2025 is a Monday
        let grid = MonthGrid::build(2025, 9, &GridOptions::default()).unwrap();
        assert_eq!(grid.cells[0][0].date, Some(ymd(2025, 9, 1)));
        assert_eq!(grid.cells[5][6].date, Some(ymd(2025, 10, 12)));
    }

    #[test]
    fn test_week_numbers() {
        let grid = MonthGrid::build(2025, 3, &GridOptions::default()).unwrap();
        assert_eq!(grid.week_numbers, [Some(9), Some(10), Some(11), Some(12), Some(13), Some(14)]);

        let opts = GridOptions {
            first_weekday: Weekday::Sun,
            show_other_month_days: false,
            ..Default::default()
        };
        // February 2026 starts on a Sunday and fills exactly four rows
        let grid = MonthGrid::build(2026, 2, &opts).unwrap();
        assert_eq!(grid.week_numbers[0], Some(6));
        assert_eq!(grid.week_numbers[4], None);
        assert_eq!(grid.week_numbers[5], None);
    }

    #[test]
    fn test_invalid_month() {
        assert!(MonthGrid::build(2025, 13, &GridOptions::default()).is_none());
    }
}
