//! Shared UI color constants and the bar palette.

use ratatui::style::Color;

pub const CONTROL_BAR_BG: Color = Color::Rgb(20, 20, 20);
pub const STATUS_BAR_BG: Color = Color::Rgb(30, 30, 30);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
pub const DIALOG_BG: Color = Color::Rgb(24, 24, 28);

pub const TEXT_BRIGHT: Color = Color::Rgb(235, 235, 235);
pub const TEXT_PRIMARY: Color = Color::Rgb(200, 200, 200);
pub const TEXT_SECONDARY: Color = Color::Rgb(160, 160, 160);
pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 120);
pub const TEXT_FAINT: Color = Color::Rgb(70, 70, 70);

pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_SUCCESS: Color = Color::Rgb(2, 254, 94);
pub const ACCENT_WARNING: Color = Color::Yellow;

/// Colors used for the three bar highlight states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarPalette {
    /// Bars that are neither compared nor swapped
    pub bar: Color,
    /// Bars being compared
    pub compare: Color,
    /// Bars that were just swapped
    pub swap: Color,
}

impl Default for BarPalette {
    fn default() -> Self {
        Self {
            bar: Color::Rgb(192, 192, 192),
            compare: Color::Rgb(255, 0, 0),
            swap: ACCENT_SUCCESS,
        }
    }
}

/// Parse a hex color string (`#RGB`, `#RRGGBB` or `#RRGGBBAA`, alpha ignored).
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>, scale: u8| {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|v| v * scale)
    };

    match hex.len() {
        3 => Some(Color::Rgb(
            channel(0..1, 17)?,
            channel(1..2, 17)?,
            channel(2..3, 17)?,
        )),
        6 | 8 => Some(Color::Rgb(
            channel(0..2, 1)?,
            channel(2..4, 1)?,
            channel(4..6, 1)?,
        )),
        _ => None,
    }
}
