//! Theme registry and loader
//!
//! Provides the built-in themes with user color overrides on top.

mod dracula;
mod gruvbox;
mod monokai;
mod nord;
mod one_dark;

use ratatui::style::Color;
use segbar_core::config::{ThemeColorOverrides, ThemeConfig};
use tracing::warn;

use crate::theme::Theme;

pub use gruvbox::dark as gruvbox_dark;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        "one-dark" | "onedark" => one_dark::default(),
        "monokai" => monokai::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 8] = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.bg1, &mut theme.bg1),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.grey1, &mut theme.grey1),
        (&overrides.accent, &mut theme.accent),
        (&overrides.selection, &mut theme.selection),
        (&overrides.badge, &mut theme.badge),
        (&overrides.badge_muted, &mut theme.badge_muted),
    ];

    for (hex, slot) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Invalid color '{}' in theme overrides, ignoring", hex),
            }
        }
    }

    theme
}

/// Names accepted by [`load_theme`]
pub fn available_themes() -> &'static [&'static str] {
    &[
        "gruvbox-dark",
        "gruvbox-light",
        "nord",
        "dracula",
        "one-dark",
        "monokai",
    ]
}
