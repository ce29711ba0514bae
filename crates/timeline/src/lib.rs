use thiserror::Error;

mod clip;
pub use clip::*;
mod track;
pub use track::*;
mod sequence;
pub use sequence::*;
pub mod edit_operations;
pub use edit_operations::{CutData, CutOutcome};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("invalid operation: {0}")]
    InvalidOp(String),
    #[error("track not found: {0}")]
    TrackNotFound(TrackId),
    #[error("track {0} is a boundary slot and cannot be edited")]
    BoundaryTrack(TrackId),
    #[error("track locked: {0}")]
    TrackLocked(TrackId),
    #[error("clip index {index} out of range on track {track}")]
    ClipNotFound { track: TrackId, index: usize },
}

pub type Frame = i64; // timeline position in frames, negatives allowed for offsets

/// Slot index of a track inside a [`Sequence`]. Doubles as stacking order.
pub type TrackId = usize;
