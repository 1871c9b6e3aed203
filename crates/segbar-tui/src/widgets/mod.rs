mod segmented_control;
mod status_bar;

pub use segmented_control::{ChangeHandler, SegmentedControl, TileProps, TileRenderer};
pub use status_bar::StatusBarWidget;
