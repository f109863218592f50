//! # Calendar Styling
//!
//! Maps cell visual states onto concrete colours. The palette comes from the
//! [`CalendarConfig`](crate::config::CalendarConfig) of each calendar instance;
//! there is no process-wide theme.

use button_calendar_core::VisualState;
use eframe::egui::Color32;

use crate::config::Palette;
use crate::error::AppError;

/// Spacing in pixels between calendar buttons
pub const CALENDAR_BUTTON_SPACING: f32 = 2.0;

/// Date and week button size
pub const CELL_SIZE: [f32; 2] = [36.0, 28.0];

/// Parse a `#RRGGBB` colour
pub fn parse_hex_color(name: &'static str, value: &str) -> Result<Color32, AppError> {
    let invalid = || AppError::InvalidColor {
        name,
        value: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
    Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Foreground/background pair for a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub text: Color32,
    pub fill: Color32,
}

/// A palette with every colour parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub default: Color32,
    pub text_default: Color32,
    pub selected: Color32,
    pub text_selected: Color32,
    pub off_month: Color32,
    pub range_select_anchor: Color32,
    pub range_select_hover: Color32,
}

impl ResolvedPalette {
    pub fn resolve(palette: &Palette) -> Result<Self, AppError> {
        Ok(Self {
            default: parse_hex_color("default", &palette.default)?,
            text_default: parse_hex_color("text_default", &palette.text_default)?,
            selected: parse_hex_color("selected", &palette.selected)?,
            text_selected: parse_hex_color("text_selected", &palette.text_selected)?,
            off_month: parse_hex_color("off_month", &palette.off_month)?,
            range_select_anchor: parse_hex_color("range_select_anchor", &palette.range_select_anchor)?,
            range_select_hover: parse_hex_color("range_select_hover", &palette.range_select_hover)?,
        })
    }

    /// Colours for a date cell in the given state
    pub fn cell_style(&self, state: VisualState) -> CellStyle {
        let (text, fill) = match state {
            VisualState::Selected => (self.text_selected, self.selected),
            VisualState::Anchor => (self.text_selected, self.range_select_anchor),
            VisualState::Hover => (self.text_selected, self.range_select_hover),
            VisualState::DefaultInMonth => (self.text_default, self.default),
            VisualState::DefaultOutOfMonth => (self.text_selected, self.off_month),
        };
        CellStyle { text, fill }
    }

    /// Colours for navigation and week buttons
    pub fn control_style(&self) -> CellStyle {
        CellStyle {
            text: self.text_default,
            fill: self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("default", "#183440").unwrap(),
            Color32::from_rgb(0x18, 0x34, 0x40)
        );
        assert_eq!(
            parse_hex_color("default", "#f3c03f").unwrap(),
            Color32::from_rgb(0xF3, 0xC0, 0x3F)
        );

        for bad in ["183440", "#1834", "#18344G", "#18344000", ""] {
            assert!(matches!(
                parse_hex_color("default", bad),
                Err(AppError::InvalidColor { name: "default", .. })
            ));
        }
    }

    #[test]
    fn test_cell_styles_follow_palette() {
        let palette = ResolvedPalette::resolve(&Palette::default()).unwrap();

        let selected = palette.cell_style(VisualState::Selected);
        assert_eq!(selected.fill, Color32::from_rgb(0xF4, 0xE0, 0x4D));
        assert_eq!(selected.text, Color32::BLACK);

        let in_month = palette.cell_style(VisualState::DefaultInMonth);
        assert_eq!(in_month.fill, Color32::from_rgb(0x18, 0x34, 0x40));
        assert_eq!(in_month.text, Color32::WHITE);

        assert_eq!(palette.cell_style(VisualState::DefaultOutOfMonth).fill, Color32::from_rgb(0xAA, 0xAA, 0xAA));
        assert_eq!(palette.cell_style(VisualState::Anchor).fill, palette.range_select_anchor);
        assert_eq!(palette.cell_style(VisualState::Hover).fill, palette.range_select_hover);
    }

    #[test]
    fn test_invalid_palette_entry_is_reported() {
        let palette = Palette {
            off_month: "grey".to_string(),
            ..Palette::default()
        };
        match ResolvedPalette::resolve(&palette) {
            Err(AppError::InvalidColor { name, value }) => {
                assert_eq!(name, "off_month");
                assert_eq!(value, "grey");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }
}
