//! Color constants for the TUI.

use ratatui::style::Color;

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::Magenta;
/// Total cost highlight.
pub const COST_FG: Color = Color::Yellow;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Status message color.
pub const STATUS_FG: Color = Color::Green;
/// Border of the focused form field.
pub const FOCUS_FG: Color = Color::Cyan;

/// Converts a `#RRGGBB` palette entry to a terminal color.
///
/// Malformed input falls back to gray.
pub fn hex_color(hex: &str) -> Color {
    let parse = |range: std::ops::Range<usize>| {
        hex.strip_prefix('#')
            .and_then(|h| h.get(range))
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Some(r), Some(g), Some(b)) if hex.len() == 7 => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::chart::PALETTE;

    #[test]
    fn palette_entries_parse() {
        assert_eq!(hex_color(PALETTE[0]), Color::Rgb(0xFF, 0x63, 0x84));
        for hex in PALETTE {
            assert!(matches!(hex_color(hex), Color::Rgb(..)));
        }
    }

    #[test]
    fn malformed_hex_falls_back() {
        assert_eq!(hex_color("FF6384"), Color::Gray);
        assert_eq!(hex_color("#FF63"), Color::Gray);
        assert_eq!(hex_color("#GG6384"), Color::Gray);
    }
}
