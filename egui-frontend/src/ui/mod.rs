//! # UI Module
//!
//! egui presentation of the button calendar.

pub mod calendar;
pub mod styling;

pub use calendar::*;
pub use styling::*;
