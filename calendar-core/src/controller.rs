//! # Calendar Controller Module
//!
//! Orchestrates navigation, selection and the range gesture.
//!
//! ## Responsibilities:
//! - Dispatch abstract [`CalendarEvent`]s to the owning state
//! - Keep the grid in step with the displayed month
//! - Derive per-cell [`VisualState`]s for the presentation layer
//!
//! ## Purpose:
//! The controller is the sole mutator of the navigation, selection and
//! range state. A presentation layer delivers one event at a time and renders
//! the returned [`Directive`]s before sending the next.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::grid::{Grid, DAYS_PER_WEEK, GRID_CELLS, WEEKS_PER_GRID};
use crate::navigation::{NavigationLabels, NavigationState, NavigationStep};
use crate::range_select::{RangeSelectController, RangeSelectState};
use crate::selection::SelectionSet;

/// Scroll direction of a mouse wheel event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    Up,
    Down,
}

impl WheelDirection {
    /// Wheel up goes back a month, wheel down goes forward
    pub fn navigation_step(self) -> NavigationStep {
        match self {
            WheelDirection::Up => NavigationStep::BackMonth,
            WheelDirection::Down => NavigationStep::ForwardMonth,
        }
    }
}

/// Normalized input from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEvent {
    /// Left click on a date cell
    PrimaryClick { index: usize },
    /// Right click on a date cell; `modified` when shift or ctrl was held
    SecondaryClick { index: usize, modified: bool },
    /// Pointer entered a date cell (only forwarded while hover tracking is on)
    Hover { index: usize },
    /// Scroll while the pointer is over the widget
    Wheel(WheelDirection),
    Navigate(NavigationStep),
    /// The `+/-` button beside week row `week`
    WeekToggle { week: usize },
}

/// How a single date cell should look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualState {
    Selected,
    Anchor,
    Hover,
    DefaultInMonth,
    DefaultOutOfMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDirective {
    pub index: usize,
    pub state: VisualState,
}

/// Instruction for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    Cell(CellDirective),
    /// New captions for the navigation row
    Labels(NavigationLabels),
    /// Start (`true`) or stop forwarding hover events
    TrackHover(bool),
}

/// The date range picker state machine
#[derive(Debug, Clone)]
pub struct CalendarController {
    navigation: NavigationState,
    grid: Grid,
    selection: SelectionSet,
    range: RangeSelectController,
}

impl CalendarController {
    /// Create a controller showing the month of `seed` (today when `None`)
    /// with that date pre-selected
    pub fn new(seed: Option<CalendarDate>) -> Self {
        let seed = seed.unwrap_or_else(CalendarDate::today);
        let navigation = NavigationState::containing(seed);
        let grid = Grid::build(navigation.year(), navigation.month());

        let mut selection = SelectionSet::new();
        selection.toggle(seed, true);

        log::info!("📅 Calendar opened on {} ({}/{})", seed, navigation.month(), navigation.year());

        Self {
            navigation,
            grid,
            selection,
            range: RangeSelectController::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.navigation.year()
    }

    pub fn month(&self) -> u32 {
        self.navigation.month()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn range_state(&self) -> RangeSelectState {
        self.range.state()
    }

    /// Whether hover events should currently be forwarded
    pub fn is_tracking_hover(&self) -> bool {
        self.range.is_active()
    }

    pub fn labels(&self) -> NavigationLabels {
        self.navigation.labels()
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.selection.contains(date)
    }

    /// All selected dates in chronological order
    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        self.selection.list()
    }

    /// Look of a cell ignoring any range in progress
    pub fn base_state(&self, index: usize) -> VisualState {
        let cell = self.grid.cell(index);
        if self.selection.contains(cell.date) {
            VisualState::Selected
        } else if cell.in_month {
            VisualState::DefaultInMonth
        } else {
            VisualState::DefaultOutOfMonth
        }
    }

    /// Look of a cell including the range overlay
    pub fn visual_state(&self, index: usize) -> VisualState {
        if let (Some(anchor), Some(range)) = (self.range.anchor(), self.range.range()) {
            if index == anchor {
                return VisualState::Anchor;
            }
            if range.contains(&index) {
                return VisualState::Hover;
            }
        }
        self.base_state(index)
    }

    /// Every cell plus the navigation labels, for a first paint
    pub fn refresh_all(&self) -> Vec<Directive> {
        let mut directives = self.cell_directives(0..GRID_CELLS);
        directives.push(Directive::Labels(self.labels()));
        directives
    }

    /// Apply one event and describe what changed
    pub fn handle(&mut self, event: CalendarEvent) -> Vec<Directive> {
        log::debug!("Calendar event: {:?}", event);

        match event {
            CalendarEvent::Wheel(direction) => self.navigate(direction.navigation_step()),
            CalendarEvent::Navigate(step) => self.navigate(step),
            CalendarEvent::PrimaryClick { index } => {
                check_cell_index(index);
                if self.range.is_active() {
                    self.commit_range(index, true)
                } else {
                    self.toggle_cell(index)
                }
            }
            CalendarEvent::SecondaryClick { index, modified } => {
                check_cell_index(index);
                if self.range.is_active() {
                    self.commit_range(index, !modified)
                } else {
                    self.begin_range(index)
                }
            }
            CalendarEvent::Hover { index } => {
                check_cell_index(index);
                self.hover(index)
            }
            CalendarEvent::WeekToggle { week } => self.toggle_week(week),
        }
    }

    /// Step the displayed month/year, abandoning any range in progress
    pub fn navigate(&mut self, step: NavigationStep) -> Vec<Directive> {
        let mut directives = Vec::new();
        if self.range.abort() {
            log::info!("🔄 Range select aborted by navigation");
            directives.push(Directive::TrackHover(false));
        }

        let (year, month) = self.navigation.step(step);
        self.grid = Grid::build(year, month);
        log::info!("📅 Navigated to {}/{}", month, year);

        directives.extend(self.cell_directives(0..GRID_CELLS));
        directives.push(Directive::Labels(self.labels()));
        directives
    }

    /// Select all seven dates of `week` unless they are all selected already,
    /// in which case deselect them. Aborts any range in progress.
    pub fn toggle_week(&mut self, week: usize) -> Vec<Directive> {
        assert!(week < WEEKS_PER_GRID, "week index {} out of range 0..{}", week, WEEKS_PER_GRID);

        let aborted = self.range.abort();
        if aborted {
            log::info!("🔄 Range select aborted by week toggle");
        }

        let dates = self.grid.week(week).to_vec();
        let all_selected = dates.iter().all(|d| self.selection.contains(*d));
        for date in dates {
            self.selection.toggle(date, !all_selected);
        }
        log::info!(
            "Week {} {}",
            week,
            if all_selected { "deselected" } else { "selected" }
        );

        if aborted {
            let mut directives = vec![Directive::TrackHover(false)];
            directives.extend(self.cell_directives(0..GRID_CELLS));
            directives
        } else {
            let start = week * DAYS_PER_WEEK;
            self.cell_directives(start..start + DAYS_PER_WEEK)
        }
    }

    fn toggle_cell(&mut self, index: usize) -> Vec<Directive> {
        let date = self.grid.date_at(index);
        let select = !self.selection.contains(date);
        self.selection.toggle(date, select);
        log::debug!("{} {}", if select { "Selected" } else { "Deselected" }, date);

        self.cell_directives(index..index + 1)
    }

    fn begin_range(&mut self, index: usize) -> Vec<Directive> {
        self.range.begin(index);
        log::info!("Range select anchored at {}", self.grid.date_at(index));

        vec![
            Directive::Cell(CellDirective {
                index,
                state: VisualState::Anchor,
            }),
            Directive::TrackHover(true),
        ]
    }

    fn hover(&mut self, index: usize) -> Vec<Directive> {
        if self.range.extend(index).is_none() {
            log::debug!("Ignoring hover over cell {} while idle", index);
            return Vec::new();
        }
        self.cell_directives(0..GRID_CELLS)
    }

    fn commit_range(&mut self, index: usize, select: bool) -> Vec<Directive> {
        let Some(range) = self.range.commit(index) else {
            return Vec::new();
        };

        for ix in range.clone() {
            self.selection.toggle(self.grid.date_at(ix), select);
        }
        log::info!(
            "Range {}..={} {}",
            self.grid.date_at(*range.start()),
            self.grid.date_at(*range.end()),
            if select { "selected" } else { "deselected" }
        );

        let mut directives = self.cell_directives(0..GRID_CELLS);
        directives.push(Directive::TrackHover(false));
        directives
    }

    fn cell_directives(&self, indices: std::ops::Range<usize>) -> Vec<Directive> {
        indices
            .map(|index| {
                Directive::Cell(CellDirective {
                    index,
                    state: self.visual_state(index),
                })
            })
            .collect()
    }
}

fn check_cell_index(index: usize) {
    assert!(index < GRID_CELLS, "cell index {} out of range 0..{}", index, GRID_CELLS);
}
