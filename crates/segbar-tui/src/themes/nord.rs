//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Nord default theme
pub fn default() -> Theme {
    Theme {
        // Polar Night
        bg0: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        bg1: Color::Rgb(0x3b, 0x42, 0x52), // nord1
        // Snow Storm
        fg0: Color::Rgb(0xec, 0xef, 0xf4), // nord6
        fg1: Color::Rgb(0xe5, 0xe9, 0xf0), // nord5
        grey1: Color::Rgb(0x81, 0x8b, 0x9e),
        // Frost
        accent: Color::Rgb(0x8f, 0xbc, 0xbb),    // nord7
        selection: Color::Rgb(0x4c, 0x56, 0x6a), // nord3
        // Aurora
        badge: Color::Rgb(0xeb, 0xcb, 0x8b),       // nord13
        badge_muted: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
    }
}
