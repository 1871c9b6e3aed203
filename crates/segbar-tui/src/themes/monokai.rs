//! Monokai theme

use ratatui::style::Color;
use crate::theme::Theme;

/// Monokai classic
pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x27, 0x28, 0x22),
        bg1: Color::Rgb(0x3e, 0x3d, 0x32),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xcf, 0xcf, 0xc2),
        grey1: Color::Rgb(0x75, 0x71, 0x5e),
        accent: Color::Rgb(0xa6, 0xe2, 0x2e),
        selection: Color::Rgb(0x49, 0x48, 0x3e),
        badge: Color::Rgb(0xfd, 0x97, 0x1f),
        badge_muted: Color::Rgb(0x49, 0x48, 0x3e),
    }
}
