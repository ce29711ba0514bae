use serde::{Deserialize, Serialize};

/// What the compositor tool is doing with the compositor under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositorSubMode {
    /// Dragging the in or out edge
    Trim,
    /// Dragging the whole compositor along its track
    Move,
}

/// Timeline interaction mode, set by the edit-tool controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Clips overwrite whatever they are dropped on
    OverwriteMove,

    /// Dragging one end of a clip
    ClipEndDrag,

    /// Trimming or moving a compositor
    CompositorEdit(CompositorSubMode),

    /// Trim one side of a cut, rippling the rest of the track
    OneRollTrim,

    /// Move a cut point between two adjacent clips
    TwoRollTrim,

    /// Spacer tool, moves everything after the pressed clip on all tracks
    MultiMove,

    /// Any mode without snapping
    Other,
}

impl Default for EditMode {
    fn default() -> Self {
        Self::OverwriteMove
    }
}

impl EditMode {
    /// Get human-readable name
    pub fn name(&self) -> &str {
        match self {
            Self::OverwriteMove => "Overwrite Move",
            Self::ClipEndDrag => "Clip End Drag",
            Self::CompositorEdit(CompositorSubMode::Trim) => "Compositor Trim",
            Self::CompositorEdit(CompositorSubMode::Move) => "Compositor Move",
            Self::OneRollTrim => "One Roll Trim",
            Self::TwoRollTrim => "Two Roll Trim",
            Self::MultiMove => "Spacer",
            Self::Other => "Other",
        }
    }

    pub fn has_snapping(&self) -> bool {
        !matches!(self, Self::Other)
    }
}
