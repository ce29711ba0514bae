use serde::{Deserialize, Serialize};

use crate::SnapError;

const DEFAULT_THRESHOLD_PX: f32 = 6.0;

/// Snapping configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Enable snapping
    pub enabled: bool,

    /// Largest pixel distance that still snaps, exclusive
    pub threshold_px: f32,

    /// Snap to playhead
    pub snap_to_playhead: bool,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_px: DEFAULT_THRESHOLD_PX,
            snap_to_playhead: true,
        }
    }
}

impl SnapSettings {
    /// Toggle snapping on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn validate(&self) -> Result<(), SnapError> {
        if !self.threshold_px.is_finite() || self.threshold_px <= 0.0 {
            return Err(SnapError::InvalidThreshold(self.threshold_px));
        }
        Ok(())
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SnapError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}
