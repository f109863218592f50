//! # Button Calendar Core
//!
//! Selection and navigation logic for a six-week date range picker.
//!
//! The presentation layer feeds already-normalized [`CalendarEvent`]s into a
//! [`CalendarController`] and renders the [`Directive`]s it gets back. Nothing
//! in this crate touches a drawing API.
//!
//! ```rust
//! use button_calendar_core::{CalendarController, CalendarDate, CalendarEvent};
//!
//! let seed: CalendarDate = "2024-03-15".parse().unwrap();
//! let mut calendar = CalendarController::new(Some(seed));
//!
//! calendar.handle(CalendarEvent::SecondaryClick { index: 3, modified: false });
//! calendar.handle(CalendarEvent::Hover { index: 7 });
//! calendar.handle(CalendarEvent::PrimaryClick { index: 7 });
//!
//! assert_eq!(calendar.selected_dates().len(), 6);
//! ```

pub mod controller;
pub mod date;
pub mod error;
pub mod grid;
pub mod navigation;
pub mod range_select;
pub mod selection;

pub use controller::*;
pub use date::*;
pub use error::*;
pub use grid::*;
pub use navigation::*;
pub use range_select::*;
pub use selection::*;
