//! # Button Calendar (egui)
//!
//! Presentation adapter that draws a [`button_calendar_core::CalendarController`]
//! with egui buttons.
//!
//! ## Usage:
//! Inside an existing egui application:
//! ```rust,no_run
//! use button_calendar_egui::{ButtonCalendar, CalendarConfig};
//!
//! let calendar = ButtonCalendar::embedded(CalendarConfig::default()).unwrap();
//! // in your update(): calendar.show(ui);
//! let picked = calendar.selected_dates();
//! ```
//!
//! Or in a window of its own:
//! ```rust,no_run
//! use button_calendar_egui::{ButtonCalendar, CalendarConfig};
//!
//! let picked = ButtonCalendar::standalone(CalendarConfig::default())?.run()?;
//! # Ok::<(), button_calendar_egui::AppError>(())
//! ```

pub mod config;
pub mod error;
pub mod ui;

pub use config::*;
pub use error::*;
pub use ui::*;
