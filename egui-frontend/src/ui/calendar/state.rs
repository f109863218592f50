//! # Calendar Widget State
//!
//! Everything the widget needs between frames: the controller, the cell
//! looks it has been told to draw, the navigation captions and whether hover
//! events are being forwarded.
//!
//! ## Construction modes:
//! - [`CalendarMode::Embedded`] - drawn inside a host application's `Ui`
//! - [`CalendarMode::Standalone`] - may open its own window with `run()`

use button_calendar_core::{
    CalendarController, CalendarDate, CalendarEvent, Directive, NavigationLabels, VisualState,
    WheelDirection, GRID_CELLS,
};

use crate::config::CalendarConfig;
use crate::error::AppError;
use crate::ui::styling::ResolvedPalette;

/// Scroll distance in points that counts as one wheel notch
pub const SCROLL_NOTCH: f32 = 50.0;

/// How the calendar is hosted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarMode {
    Embedded,
    Standalone,
}

/// A button calendar presentation over a [`CalendarController`]
#[derive(Debug)]
pub struct ButtonCalendar {
    pub(super) mode: CalendarMode,
    pub(super) config: CalendarConfig,
    pub(super) palette: ResolvedPalette,
    pub(super) controller: CalendarController,
    pub(super) cells: [VisualState; GRID_CELLS],
    pub(super) labels: NavigationLabels,
    pub(super) tracking_hover: bool,
    /// Last cell a hover event was sent for, to avoid repeats every frame
    pub(super) last_hovered: Option<usize>,
    /// Scroll not yet turned into a wheel step
    pub(super) scroll_accumulator: f32,
}

impl ButtonCalendar {
    /// A calendar to be drawn inside another application's window
    pub fn embedded(config: CalendarConfig) -> Result<Self, AppError> {
        Self::with_mode(config, CalendarMode::Embedded)
    }

    /// A calendar that owns its window, see [`ButtonCalendar::run`]
    pub fn standalone(config: CalendarConfig) -> Result<Self, AppError> {
        Self::with_mode(config, CalendarMode::Standalone)
    }

    fn with_mode(config: CalendarConfig, mode: CalendarMode) -> Result<Self, AppError> {
        let palette = ResolvedPalette::resolve(&config.palette)?;
        let controller = CalendarController::new(config.seed_date);
        let labels = controller.labels();

        let mut calendar = Self {
            mode,
            config,
            palette,
            controller,
            cells: [VisualState::DefaultInMonth; GRID_CELLS],
            labels,
            tracking_hover: false,
            last_hovered: None,
            scroll_accumulator: 0.0,
        };
        let initial = calendar.controller.refresh_all();
        calendar.apply(initial);

        log::info!("Created {:?} button calendar", mode);
        Ok(calendar)
    }

    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    /// Selected dates in chronological order
    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        self.controller.selected_dates()
    }

    /// The look most recently assigned to `index`
    pub fn cell_state(&self, index: usize) -> VisualState {
        self.cells[index]
    }

    pub fn labels(&self) -> &NavigationLabels {
        &self.labels
    }

    pub fn is_tracking_hover(&self) -> bool {
        self.tracking_hover
    }

    /// Feed one event to the controller and apply the result
    pub fn dispatch(&mut self, event: CalendarEvent) {
        if let CalendarEvent::Hover { index } = event {
            if !self.tracking_hover {
                return;
            }
            self.last_hovered = Some(index);
        }

        let directives = self.controller.handle(event);
        self.apply(directives);
    }

    /// Add a frame's vertical scroll and return a wheel step once a full
    /// notch has built up. At most one step per call.
    pub fn accumulate_scroll(&mut self, delta: f32) -> Option<WheelDirection> {
        self.scroll_accumulator += delta;
        if self.scroll_accumulator >= SCROLL_NOTCH {
            self.scroll_accumulator -= SCROLL_NOTCH;
            Some(WheelDirection::Up)
        } else if self.scroll_accumulator <= -SCROLL_NOTCH {
            self.scroll_accumulator += SCROLL_NOTCH;
            Some(WheelDirection::Down)
        } else {
            None
        }
    }

    /// Forget partial scroll, e.g. when the pointer leaves the calendar
    pub fn reset_scroll(&mut self) {
        self.scroll_accumulator = 0.0;
    }

    /// Update the cached cell looks, captions and hover tracking
    pub fn apply(&mut self, directives: Vec<Directive>) {
        for directive in directives {
            match directive {
                Directive::Cell(cell) => self.cells[cell.index] = cell.state,
                Directive::Labels(labels) => self.labels = labels,
                Directive::TrackHover(track) => {
                    self.tracking_hover = track;
                    self.last_hovered = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use button_calendar_core::NavigationStep;

    fn march_2024(mode: CalendarMode) -> ButtonCalendar {
        let config = CalendarConfig {
            seed_date: Some("2024-03-15".parse().unwrap()),
            ..CalendarConfig::default()
        };
        match mode {
            CalendarMode::Embedded => ButtonCalendar::embedded(config).unwrap(),
            CalendarMode::Standalone => ButtonCalendar::standalone(config).unwrap(),
        }
    }

    #[test]
    fn test_initial_paint() {
        let calendar = march_2024(CalendarMode::Embedded);
        assert_eq!(calendar.mode(), CalendarMode::Embedded);
        assert_eq!(calendar.cell_state(0), VisualState::DefaultOutOfMonth);
        assert_eq!(calendar.cell_state(19), VisualState::Selected);
        assert_eq!(calendar.labels().month_and_year, "MAR/2024");
        assert!(!calendar.is_tracking_hover());
    }

    #[test]
    fn test_range_gesture_updates_cells() {
        let mut calendar = march_2024(CalendarMode::Standalone);

        calendar.dispatch(CalendarEvent::SecondaryClick { index: 3, modified: false });
        assert!(calendar.is_tracking_hover());
        assert_eq!(calendar.cell_state(3), VisualState::Anchor);

        calendar.dispatch(CalendarEvent::Hover { index: 6 });
        assert_eq!(calendar.last_hovered, Some(6));
        assert_eq!(calendar.cell_state(5), VisualState::Hover);

        calendar.dispatch(CalendarEvent::PrimaryClick { index: 6 });
        assert!(!calendar.is_tracking_hover());
        assert_eq!(calendar.last_hovered, None);
        for ix in 3..=6 {
            assert_eq!(calendar.cell_state(ix), VisualState::Selected);
        }
        assert_eq!(calendar.selected_dates().len(), 5);
    }

    #[test]
    fn test_hover_dropped_while_not_tracking() {
        let mut calendar = march_2024(CalendarMode::Embedded);
        calendar.dispatch(CalendarEvent::Hover { index: 4 });
        assert_eq!(calendar.last_hovered, None);
        assert_eq!(calendar.cell_state(4), VisualState::DefaultOutOfMonth);
    }

    #[test]
    fn test_navigation_updates_labels() {
        let mut calendar = march_2024(CalendarMode::Embedded);
        calendar.dispatch(CalendarEvent::Navigate(NavigationStep::BackYear));
        assert_eq!(calendar.labels().month_and_year, "MAR/2023");

        calendar.dispatch(CalendarEvent::Wheel(WheelDirection::Up));
        assert_eq!(calendar.labels().month_and_year, "FEB/2023");
        assert_eq!(calendar.labels().back_month, "<JAN");
    }

    #[test]
    fn test_small_scroll_deltas_add_up_to_one_step() {
        let mut calendar = march_2024(CalendarMode::Embedded);

        // A trackpad flick spread over several frames
        let frames = [12.0, 15.0, 18.0, 9.0, 4.0];
        let steps: Vec<_> = frames.iter().filter_map(|d| calendar.accumulate_scroll(*d)).collect();
        assert_eq!(steps, vec![WheelDirection::Up]);

        for step in steps {
            calendar.dispatch(CalendarEvent::Wheel(step));
        }
        assert_eq!(calendar.labels().month_and_year, "FEB/2024");
    }

    #[test]
    fn test_large_scroll_moves_one_step_per_frame() {
        let mut calendar = march_2024(CalendarMode::Embedded);
        assert_eq!(calendar.accumulate_scroll(-120.0), Some(WheelDirection::Down));
        assert_eq!(calendar.accumulate_scroll(0.0), Some(WheelDirection::Down));
        assert_eq!(calendar.accumulate_scroll(0.0), None);
    }

    #[test]
    fn test_reset_scroll_drops_partial_notch() {
        let mut calendar = march_2024(CalendarMode::Embedded);
        assert_eq!(calendar.accumulate_scroll(40.0), None);
        calendar.reset_scroll();
        assert_eq!(calendar.accumulate_scroll(40.0), None);
    }

    #[test]
    fn test_invalid_palette_fails_construction() {
        let mut config = CalendarConfig::default();
        config.palette.selected = "#GGGGGG".to_string();
        assert!(matches!(
            ButtonCalendar::embedded(config),
            Err(AppError::InvalidColor { name: "selected", .. })
        ));
    }
}
