use crate::{Frame, TrackId};

/// Dragging one or more clips in overwrite mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverwriteMoveData {
    /// Frame under the pointer when the drag started
    pub press_frame: Frame,
    /// Timeline start of the first moving clip before the drag
    pub first_clip_start: Frame,
    /// Frames from the first moving clip's start to the last one's end
    pub moving_length: Frame,
}

/// Frame extent of a box selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSelection {
    pub topleft_frame: Frame,
    pub width_frames: Frame,
}

/// Dragging a box selection in overwrite mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverwriteBoxData {
    pub press_frame: Frame,
    /// `None` until the box has been drawn
    pub selection: Option<BoxSelection>,
    /// Written by the resolver: frame under the possibly snapped pointer,
    /// from which the caller computes the move delta.
    pub snapped_frame: Option<Frame>,
}

/// Trimming a compositor edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositorTrimData {
    /// Track the compositor composites onto
    pub track: TrackId,
    /// `false` when the out edge is dragged
    pub trim_is_clip_in: bool,
}

/// Moving a compositor along its track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositorMoveData {
    /// Track the compositor composites onto
    pub track: TrackId,
    pub press_frame: Frame,
    pub clip_in: Frame,
    pub clip_length: Frame,
}

/// One or two roll trim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimData {
    /// Written by the resolver: the trim frame after snapping
    pub selected_frame: Frame,
}

/// Spacer drag moving everything after the pressed clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacerMoveData {
    pub press_frame: Frame,
    /// Timeline start of the first clip that moves
    pub first_moved_frame: Frame,
}

/// State of the drag in progress. Each variant belongs to one [`EditMode`].
///
/// [`EditMode`]: crate::EditMode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditData {
    OverwriteMove(OverwriteMoveData),
    OverwriteBox(OverwriteBoxData),
    ClipEndDrag,
    CompositorTrim(CompositorTrimData),
    CompositorMove(CompositorMoveData),
    Trim(TrimData),
    SpacerMove(SpacerMoveData),
}

impl EditData {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::OverwriteMove(_) => "overwrite_move",
            Self::OverwriteBox(_) => "overwrite_box",
            Self::ClipEndDrag => "clip_end_drag",
            Self::CompositorTrim(_) => "compositor_trim",
            Self::CompositorMove(_) => "compositor_move",
            Self::Trim(_) => "trim",
            Self::SpacerMove(_) => "spacer_move",
        }
    }
}
