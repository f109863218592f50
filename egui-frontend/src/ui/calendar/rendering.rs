//! # Calendar Rendering
//!
//! Draws the button calendar and turns egui input into [`CalendarEvent`]s:
//!
//! - left click on a date -> `PrimaryClick`
//! - right click on a date -> `SecondaryClick` (shift/ctrl held -> modified)
//! - pointer over a new date while a range is open -> `Hover`
//! - scroll while the pointer is over the calendar -> `Wheel`, one per
//!   [`SCROLL_NOTCH`](super::state::SCROLL_NOTCH) of accumulated scroll
//!
//! Events are collected while the frame is laid out and dispatched in order
//! once it is finished, so the controller only ever sees the grid that was
//! just drawn.

use button_calendar_core::{
    CalendarEvent, NavigationStep, DAYS_PER_WEEK, DAY_HEADERS, WEEKS_PER_GRID,
};
use eframe::egui;

use super::state::ButtonCalendar;
use crate::ui::styling::{CellStyle, CALENDAR_BUTTON_SPACING, CELL_SIZE};

/// Caption of the week toggle buttons
pub const WEEK_BUTTON_TEXT: &str = "+/-";

/// Title above the grid
pub const FRAME_TITLE: &str = " Select Dates: ";

impl ButtonCalendar {
    /// Draw the calendar into `ui` and process this frame's input
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let mut events = Vec::new();

        let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(FRAME_TITLE)
                        .font(egui::FontId::monospace(self.config.fonts.label))
                        .strong(),
                );
                ui.add_space(self.config.fonts.label_small);

                self.draw_navigation_row(ui, &mut events);
                ui.add_space(4.0);
                self.draw_date_grid(ui, &mut events);
            });
        });

        let response = frame.response;
        if ui.rect_contains_pointer(response.rect) {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if let Some(direction) = self.accumulate_scroll(scroll) {
                events.push(CalendarEvent::Wheel(direction));
            }
        } else {
            self.reset_scroll();
        }

        for event in events {
            self.dispatch(event);
        }

        response
    }

    fn draw_navigation_row(&self, ui: &mut egui::Ui, events: &mut Vec<CalendarEvent>) {
        let style = self.palette.control_style();
        let label_size = self.config.fonts.label;

        ui.horizontal(|ui| {
            if control_button(ui, &self.labels.back_year, style, label_size).clicked() {
                events.push(CalendarEvent::Navigate(NavigationStep::BackYear));
            }
            if control_button(ui, &self.labels.back_month, style, label_size).clicked() {
                events.push(CalendarEvent::Navigate(NavigationStep::BackMonth));
            }

            ui.label(
                egui::RichText::new(&self.labels.month_and_year)
                    .font(egui::FontId::monospace(self.config.fonts.calendar_button))
                    .strong(),
            );

            if control_button(ui, &self.labels.forward_month, style, label_size).clicked() {
                events.push(CalendarEvent::Navigate(NavigationStep::ForwardMonth));
            }
            if control_button(ui, &self.labels.forward_year, style, label_size).clicked() {
                events.push(CalendarEvent::Navigate(NavigationStep::ForwardYear));
            }
        });
    }

    fn draw_date_grid(&self, ui: &mut egui::Ui, events: &mut Vec<CalendarEvent>) {
        let button_font = egui::FontId::monospace(self.config.fonts.calendar_button);
        let header_font = egui::FontId::monospace(self.config.fonts.label);
        let modified = ui.input(|i| i.modifiers.shift || i.modifiers.ctrl);

        egui::Grid::new("button_calendar_grid")
            .spacing([CALENDAR_BUTTON_SPACING, CALENDAR_BUTTON_SPACING])
            .show(ui, |ui| {
                for header in DAY_HEADERS {
                    ui.label(egui::RichText::new(header).font(header_font.clone()).strong());
                }
                ui.label(egui::RichText::new("WEEK").font(header_font.clone()).strong());
                ui.end_row();

                for week in 0..WEEKS_PER_GRID {
                    for column in 0..DAYS_PER_WEEK {
                        let index = week * DAYS_PER_WEEK + column;
                        let date = self.controller.grid().date_at(index);
                        let style = self.palette.cell_style(self.cells[index]);

                        let response = ui.add(cell_button(&date.day_label(), style, button_font.clone()));

                        if response.clicked() {
                            events.push(CalendarEvent::PrimaryClick { index });
                        } else if response.secondary_clicked() {
                            events.push(CalendarEvent::SecondaryClick { index, modified });
                        } else if self.tracking_hover
                            && response.hovered()
                            && self.last_hovered != Some(index)
                        {
                            events.push(CalendarEvent::Hover { index });
                        }
                    }

                    let week_style = self.palette.control_style();
                    if ui.add(cell_button(WEEK_BUTTON_TEXT, week_style, button_font.clone())).clicked() {
                        events.push(CalendarEvent::WeekToggle { week });
                    }
                    ui.end_row();
                }
            });
    }
}

fn cell_button(text: &str, style: CellStyle, font: egui::FontId) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).font(font).color(style.text).strong())
        .fill(style.fill)
        .min_size(egui::vec2(CELL_SIZE[0], CELL_SIZE[1]))
}

fn control_button(ui: &mut egui::Ui, text: &str, style: CellStyle, size: f32) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(text)
                .font(egui::FontId::monospace(size))
                .color(style.text),
        )
        .fill(style.fill),
    )
}
