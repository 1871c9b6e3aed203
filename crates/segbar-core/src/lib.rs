pub mod accessibility;
pub mod config;
pub mod error;
pub mod layout;
pub mod segment;

pub use config::{AppConfig, ControlConfig, KeymapConfig, SpringConfig};
pub use error::{Error, Result};
pub use layout::SegmentLayout;
pub use segment::{AccessibilityProps, AccessibilityRole, AccessibilityState, BadgeValue, Segment};
