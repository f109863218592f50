//! # Navigation Module
//!
//! Tracks the displayed month/year and computes the neighbouring months.
//! Years are unbounded in both directions.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// Three-letter month abbreviations, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Get the abbreviated name for a month number (1 = January)
pub fn month_abbreviation(month: u32) -> &'static str {
    assert!((1..=12).contains(&month), "month {} out of range 1..=12", month);
    MONTH_ABBREVIATIONS[(month - 1) as usize]
}

/// A single navigation command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationStep {
    BackYear,
    BackMonth,
    ForwardMonth,
    ForwardYear,
}

/// Caption text for the navigation row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLabels {
    /// e.g. `<<2023`
    pub back_year: String,
    /// e.g. `<FEB`
    pub back_month: String,
    /// e.g. `MAR/2024`
    pub month_and_year: String,
    /// e.g. `APR>`
    pub forward_month: String,
    /// e.g. `2025>>`
    pub forward_year: String,
}

/// The displayed month and year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    year: i32,
    month: u32,
    last_month: u32,
    next_month: u32,
}

impl NavigationState {
    pub fn new(year: i32, month: u32) -> Self {
        assert!((1..=12).contains(&month), "month {} out of range 1..=12", month);
        let mut state = Self {
            year,
            month,
            last_month: month,
            next_month: month,
        };
        state.set_next_and_last_month();
        state
    }

    /// Start on the month containing `date`
    pub fn containing(date: CalendarDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month before the displayed one (December before January)
    pub fn last_month(&self) -> u32 {
        self.last_month
    }

    /// Month after the displayed one (January after December)
    pub fn next_month(&self) -> u32 {
        self.next_month
    }

    /// Apply a navigation command and return the new `(year, month)`
    pub fn step(&mut self, step: NavigationStep) -> (i32, u32) {
        match step {
            NavigationStep::BackYear => self.year -= 1,
            NavigationStep::ForwardYear => self.year += 1,
            NavigationStep::BackMonth => {
                self.month = self.last_month;
                if self.month == 12 {
                    self.year -= 1;
                }
            }
            NavigationStep::ForwardMonth => {
                self.month = self.next_month;
                if self.month == 1 {
                    self.year += 1;
                }
            }
        }
        self.set_next_and_last_month();

        (self.year, self.month)
    }

    /// Captions for the navigation buttons
    pub fn labels(&self) -> NavigationLabels {
        NavigationLabels {
            back_year: format!("<<{}", self.year - 1),
            back_month: format!("<{}", month_abbreviation(self.last_month)),
            month_and_year: format!("{}/{}", month_abbreviation(self.month), self.year),
            forward_month: format!("{}>", month_abbreviation(self.next_month)),
            forward_year: format!("{}>>", self.year + 1),
        }
    }

    fn set_next_and_last_month(&mut self) {
        self.last_month = if self.month == 1 { 12 } else { self.month - 1 };
        self.next_month = if self.month == 12 { 1 } else { self.month + 1 };
    }
}
