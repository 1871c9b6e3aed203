use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::segment::{BadgeValue, Segment};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub animation: SpringConfig,
    #[serde(default)]
    pub control: ControlConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Spring parameters for the highlight tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Animate the tile; when false it jumps to every new target
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Stop at the target instead of overshooting it
    #[serde(default)]
    pub overshoot_clamping: bool,
    /// Speed (cells per second) below which the spring may settle
    #[serde(default = "default_rest_threshold")]
    pub rest_speed_threshold: f64,
    /// Distance (cells) from the target below which the spring may settle
    #[serde(default = "default_rest_threshold")]
    pub rest_displacement_threshold: f64,
    /// Frame rate while the tile is moving
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
            overshoot_clamping: false,
            rest_speed_threshold: default_rest_threshold(),
            rest_displacement_threshold: default_rest_threshold(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl SpringConfig {
    /// Reject parameters the spring can never settle with
    pub fn validate(&self) -> crate::Result<()> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_speed_threshold", self.rest_speed_threshold),
            ("rest_displacement_threshold", self.rest_displacement_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::Error::Config(format!(
                    "animation.{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        if self.mass == 0.0 {
            return Err(crate::Error::Config(
                "animation.mass must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Parameters the integrator can run with
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Segmented control shown by the demo and the render/describe commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Labels, as strings or `{ label, accessibility }` tables
    #[serde(default = "default_segments")]
    pub segments: Vec<Segment>,
    /// Badge per segment; non-numeric entries mean no badge
    #[serde(default)]
    pub badge_values: Vec<BadgeValue>,
    #[serde(default)]
    pub initial_index: usize,
    #[serde(default)]
    pub is_rtl: bool,
    /// Cells kept free on both sides of the row
    #[serde(default = "default_container_margin")]
    pub container_margin: u16,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            segments: default_segments(),
            badge_values: Vec::new(),
            initial_index: 0,
            is_rtl: false,
            container_margin: default_container_margin(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    "a string (theme name) or a map with 'name' and optional 'colors'",
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Row background
    pub bg0: Option<String>,
    /// Segment background
    pub bg1: Option<String>,
    /// Primary foreground (active label)
    pub fg0: Option<String>,
    /// Dimmed foreground (inactive label)
    pub grey1: Option<String>,
    /// Accent color
    pub accent: Option<String>,
    /// Highlight tile background
    pub selection: Option<String>,
    /// Active badge background
    pub badge: Option<String>,
    /// Inactive badge background
    pub badge_muted: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-n>" (Ctrl+n), "<S-Tab>", "<CR>", "gg"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the demo
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Select the next segment
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Select the previous segment
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// Select the first segment
    #[serde(default = "default_key_first")]
    pub first: String,
    /// Select the last segment
    #[serde(default = "default_key_last")]
    pub last: String,
    /// Flip between left-to-right and right-to-left layout
    #[serde(default = "default_key_toggle_rtl")]
    pub toggle_rtl: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            prev: default_key_prev(),
            first: default_key_first(),
            last: default_key_last(),
            toggle_rtl: default_key_toggle_rtl(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_prev() -> String { "h".to_string() }
fn default_key_first() -> String { "gg".to_string() }
fn default_key_last() -> String { "G".to_string() }
fn default_key_toggle_rtl() -> String { "r".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("segbar")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_stiffness() -> f64 {
    180.0
}

fn default_damping() -> f64 {
    20.0
}

fn default_mass() -> f64 {
    1.0
}

fn default_rest_threshold() -> f64 {
    0.01
}

fn default_animation_fps() -> u32 {
    60
}

fn default_segments() -> Vec<Segment> {
    ["Day", "Week", "Month", "Year"]
        .into_iter()
        .map(Segment::from)
        .collect()
}

fn default_container_margin() -> u16 {
    2
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a file, defaults when it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = Self::from_toml(&content)?;
            tracing::info!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/segbar/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("segbar")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("segbar.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Check the control section before handing it to the demo
    pub fn validate(&self) -> crate::Result<()> {
        let count = self.control.segments.len();
        if count == 0 {
            return Err(crate::Error::Config(
                "control.segments must contain at least one segment".to_string(),
            ));
        }
        if self.control.initial_index >= count {
            return Err(crate::Error::Config(format!(
                "control.initial_index {} is out of range for {} segments",
                self.control.initial_index, count
            )));
        }
        self.animation.validate()
    }
}
