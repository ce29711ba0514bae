use serde::{Deserialize, Serialize};

use crate::{CoordinateMap, Frame, Pixel, SnapError};

/// Linear zoom and horizontal scroll: `x = (frame - scroll_frame) * pixels_per_frame`.
///
/// `pixels_per_frame` has to be finite and positive. [`LinearScale::try_new`]
/// checks it; a scale built around the check still maps without panicking,
/// but its frames are meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub pixels_per_frame: f32,
    /// First visible frame, drawn at x = 0
    pub scroll_frame: Frame,
}

impl LinearScale {
    pub const fn new(pixels_per_frame: f32, scroll_frame: Frame) -> Self {
        Self {
            pixels_per_frame,
            scroll_frame,
        }
    }

    pub fn try_new(pixels_per_frame: f32, scroll_frame: Frame) -> Result<Self, SnapError> {
        let scale = Self::new(pixels_per_frame, scroll_frame);
        scale.validate()?;
        Ok(scale)
    }

    pub fn validate(&self) -> Result<(), SnapError> {
        if !self.pixels_per_frame.is_finite() || self.pixels_per_frame <= 0.0 {
            return Err(SnapError::InvalidScale(self.pixels_per_frame));
        }
        Ok(())
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new(1.0, 0)
    }
}

impl CoordinateMap for LinearScale {
    fn x_to_frame(&self, x: Pixel) -> Frame {
        // float to int casts saturate
        ((x / self.pixels_per_frame).floor() as Frame).saturating_add(self.scroll_frame)
    }

    fn frame_to_x(&self, frame: Frame) -> Pixel {
        frame.saturating_sub(self.scroll_frame) as f32 * self.pixels_per_frame
    }
}
