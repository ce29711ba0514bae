//! Snapping for timeline drags.
//!
//! While a clip, compositor, trim edge or spacer is dragged, [`SnapResolver`]
//! decides whether the dragged edge should jump onto a nearby cut or the
//! playhead, and reports where it landed so the view can draw a snap line.
//!
//! The resolver never touches the view or the timeline directly. It reads
//! them through the traits in [`environment`], so the same engine works for
//! any zoom level, track layout, or edit-mode controller.

use thiserror::Error;

pub mod coords;
pub mod edit_data;
pub mod edit_mode;
pub mod environment;
mod resolver;
pub mod settings;
mod state;

pub use coords::LinearScale;
pub use edit_data::*;
pub use edit_mode::{CompositorSubMode, EditMode};
pub use environment::{CoordinateMap, EditorState, SnapEnvironment, TimelineQuery};
pub use resolver::SnapResolver;
pub use settings::SnapSettings;
pub use state::SnapState;

pub use timeline::{Frame, TrackId};

/// Horizontal position on the timeline canvas, in pixels.
pub type Pixel = f32;

#[derive(Debug, Error)]
pub enum SnapError {
    #[error("snap threshold must be a positive number of pixels, got {0}")]
    InvalidThreshold(f32),
    #[error("zoom must be a positive number of pixels per frame, got {0}")]
    InvalidScale(f32),
    #[error("invalid snap settings: {0}")]
    Config(#[from] serde_json::Error),
}
