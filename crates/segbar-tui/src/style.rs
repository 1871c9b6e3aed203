//! Style presets of the segmented control
//!
//! Every element has a built-in style derived from the theme. Caller overrides
//! are patched over it with [`Style::patch`], so a key set in the override wins
//! and everything else keeps the default.

use ratatui::style::{Modifier, Style};

use crate::theme::Theme;

/// Caller style overrides; an empty `Style` leaves the default untouched
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlStyles {
    pub active_text: Style,
    pub inactive_text: Style,
    pub active_badge: Style,
    pub inactive_badge: Style,
    pub badge_text: Style,
    /// Whole row, including the margins
    pub wrapper: Style,
    /// Each segment's slot
    pub pressable: Style,
    /// Moving highlight tile
    pub tile: Style,
}

impl ControlStyles {
    /// Built-in styles for a theme
    pub fn defaults(theme: &Theme) -> Self {
        Self {
            active_text: Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            inactive_text: Style::default().fg(theme.grey1),
            active_badge: Style::default().fg(theme.bg0).bg(theme.badge),
            inactive_badge: Style::default().fg(theme.fg1).bg(theme.badge_muted),
            badge_text: Style::default().add_modifier(Modifier::BOLD),
            wrapper: Style::default().bg(theme.bg1),
            pressable: Style::default(),
            tile: Style::default().bg(theme.selection),
        }
    }

    /// Merge `overrides` over the theme defaults
    pub fn resolve(theme: &Theme, overrides: &ControlStyles) -> Self {
        let defaults = Self::defaults(theme);
        Self {
            active_text: defaults.active_text.patch(overrides.active_text),
            inactive_text: defaults.inactive_text.patch(overrides.inactive_text),
            active_badge: defaults.active_badge.patch(overrides.active_badge),
            inactive_badge: defaults.inactive_badge.patch(overrides.inactive_badge),
            badge_text: defaults.badge_text.patch(overrides.badge_text),
            wrapper: defaults.wrapper.patch(overrides.wrapper),
            pressable: defaults.pressable.patch(overrides.pressable),
            tile: defaults.tile.patch(overrides.tile),
        }
    }

    pub fn text(&self, active: bool) -> Style {
        if active {
            self.active_text
        } else {
            self.inactive_text
        }
    }

    /// Badge container patched with the badge text style
    pub fn badge(&self, active: bool) -> Style {
        let container = if active {
            self.active_badge
        } else {
            self.inactive_badge
        };
        container.patch(self.badge_text)
    }
}
