pub mod animation;
pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod snapshot;
pub mod style;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use animation::TileState;
pub use app::App;
pub use style::ControlStyles;
pub use theme::Theme;
pub use themes::load_theme;
pub use widgets::{SegmentedControl, TileProps};
