use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    /// Surrounding background
    pub bg0: Color,
    /// Row background behind the segments
    pub bg1: Color,

    // Foreground colors
    /// Active label
    pub fg0: Color,
    /// Text on muted badges
    pub fg1: Color,
    /// Inactive label
    pub grey1: Color,

    // Semantic colors
    pub accent: Color,
    /// Highlight tile
    pub selection: Color,
    /// Badge on the active segment
    pub badge: Color,
    /// Badge on inactive segments
    pub badge_muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox_dark()
    }
}
