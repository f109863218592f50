use button_calendar_core::CalendarDate;
use eframe::egui;
use std::sync::{Arc, Mutex, PoisonError};

use super::state::{ButtonCalendar, CalendarMode};
use crate::error::AppError;

/// Window title of a standalone calendar
pub const WINDOW_TITLE: &str = "Button Calendar";

/// eframe host for a standalone calendar
struct StandaloneApp {
    calendar: ButtonCalendar,
    /// Written every frame so the selection survives the app being dropped
    selected: Arc<Mutex<Vec<CalendarDate>>>,
}

impl eframe::App for StandaloneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.calendar.show(ui);
            });
        });

        publish_selection(&self.selected, self.calendar.selected_dates());

        // Escape and F5 close the window
        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::F5)) {
            log::info!("Closing calendar window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Overwrite the shared selection, recovering a poisoned lock
fn publish_selection(slot: &Mutex<Vec<CalendarDate>>, dates: Vec<CalendarDate>) {
    *slot.lock().unwrap_or_else(PoisonError::into_inner) = dates;
}

/// Copy the shared selection out, recovering a poisoned lock
fn read_selection(slot: &Mutex<Vec<CalendarDate>>) -> Vec<CalendarDate> {
    slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

impl ButtonCalendar {
    /// Open the calendar in its own window and block until it is closed.
    /// Returns the selected dates in chronological order.
    pub fn run(self) -> Result<Vec<CalendarDate>, AppError> {
        if self.mode != CalendarMode::Standalone {
            return Err(AppError::NotStandalone);
        }

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.config.window.width, self.config.window.height])
                .with_title(WINDOW_TITLE)
                .with_resizable(true),
            ..Default::default()
        };

        let selected = Arc::new(Mutex::new(self.selected_dates()));
        let app = StandaloneApp {
            calendar: self,
            selected: Arc::clone(&selected),
        };

        log::info!("Launching calendar window");
        eframe::run_native(WINDOW_TITLE, options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|e| AppError::Launch(e.to_string()))?;

        Ok(read_selection(&selected))
    }
}
