//! Gruvbox Material themes
//! https://github.com/sainnhe/gruvbox-material

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox dark (medium contrast)
pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
        selection: Color::Rgb(0x50, 0x49, 0x45),
        badge: Color::Rgb(0xd8, 0xa6, 0x57),
        badge_muted: Color::Rgb(0x45, 0x40, 0x3d),
    }
}

/// Gruvbox light (medium contrast)
pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xf4, 0xe8, 0xbe),
        fg0: Color::Rgb(0x65, 0x47, 0x35),
        fg1: Color::Rgb(0x4f, 0x38, 0x29),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x4c, 0x7a, 0x5d),
        selection: Color::Rgb(0xe5, 0xd5, 0xad),
        badge: Color::Rgb(0xb4, 0x71, 0x09),
        badge_muted: Color::Rgb(0xdd, 0xcc, 0xab),
    }
}
