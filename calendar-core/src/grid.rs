//! # Grid Module
//!
//! Builds the 42-cell (six week, Sunday-first) date grid for a month.
//! The grid is a recomputed value: it is rebuilt whenever the displayed
//! month changes and never carries selection state.

use chrono::{Datelike, Duration, NaiveDate};

use crate::date::CalendarDate;

/// Number of days in a week row
pub const DAYS_PER_WEEK: usize = 7;

/// Number of week rows in the grid
pub const WEEKS_PER_GRID: usize = 6;

/// Total number of cells in the grid
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// Column headers, Sunday first
pub const DAY_HEADERS: [&str; DAYS_PER_WEEK] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// A grid index paired with its date and month membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub date: CalendarDate,
    /// Whether the date falls in the displayed month (styling only)
    pub in_month: bool,
}

impl Cell {
    /// Week row of this cell (0..6)
    pub fn row(&self) -> usize {
        self.index / DAYS_PER_WEEK
    }

    /// Day-of-week column, Sunday = 0
    pub fn column(&self) -> usize {
        self.index % DAYS_PER_WEEK
    }
}

/// Six consecutive weeks of dates anchored on a displayed month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    month: u32,
    dates: [CalendarDate; GRID_CELLS],
}

impl Grid {
    /// Build the grid for `year`/`month`.
    ///
    /// Index 0 is the Sunday on or before the 1st. When the 1st is itself a
    /// Sunday the grid starts one full week earlier, so the month never
    /// begins in the top-left cell.
    pub fn build(year: i32, month: u32) -> Self {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap_or_else(|| panic!("invalid grid month {}/{}", month, year));

        let mut offset = first.weekday().num_days_from_sunday() as i64;
        if offset == 0 {
            offset = DAYS_PER_WEEK as i64;
        }
        let start = first - Duration::days(offset);

        let dates = std::array::from_fn(|ix| CalendarDate::from(start + Duration::days(ix as i64)));

        Self { month, dates }
    }

    /// The month this grid was built for
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    pub fn date_at(&self, index: usize) -> CalendarDate {
        assert!(index < GRID_CELLS, "cell index {} out of range 0..{}", index, GRID_CELLS);
        self.dates[index]
    }

    /// The seven dates of week row `week`
    pub fn week(&self, week: usize) -> &[CalendarDate] {
        assert!(week < WEEKS_PER_GRID, "week index {} out of range 0..{}", week, WEEKS_PER_GRID);
        let start = week * DAYS_PER_WEEK;
        &self.dates[start..start + DAYS_PER_WEEK]
    }

    /// Grid index of `date`, if it is visible
    pub fn index_of(&self, date: CalendarDate) -> Option<usize> {
        self.dates.iter().position(|d| *d == date)
    }

    pub fn cell(&self, index: usize) -> Cell {
        let date = self.date_at(index);
        Cell {
            index,
            date,
            in_month: date.month() == self.month,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..GRID_CELLS).map(|ix| self.cell(ix))
    }
}
