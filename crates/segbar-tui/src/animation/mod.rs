//! Spring animation for the segmented control's highlight tile
//!
//! # Layers
//!
//! - `config` - Spring configuration (re-exported from segbar-core) and helpers
//! - `spring` - Damped spring integrator, pure and time-step driven
//! - `tile` - Tile controller used as the widget's render state
//!
//! # Usage
//!
//! ```ignore
//! use segbar_tui::animation::{SpringConfig, TileState};
//!
//! let mut tile = TileState::new(SpringConfig::default());
//!
//! // Rendering the widget retargets the tile when the selection changes
//! frame.render_stateful_widget(&control, area, &mut tile);
//!
//! // In the main loop, advance each frame while it is moving
//! if tile.is_animating() {
//!     tile.update();
//! }
//! ```

pub mod config;
pub mod spring;
pub mod tile;

pub use config::{SpringConfig, SpringConfigExt};
pub use spring::Spring;
pub use tile::TileState;
