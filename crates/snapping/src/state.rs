use crate::{Frame, Pixel};

/// Outcome of the latest resolution, kept for the view to draw a snap line.
///
/// `last_snap_x` is only meaningful while `snap_happened` is set, so it is
/// only handed out through [`SnapState::snap_x`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapState {
    snap_happened: bool,
    last_snap_x: Pixel,
    playhead_frame: Option<Frame>,
}

impl SnapState {
    pub fn snap_active(&self) -> bool {
        self.snap_happened
    }

    pub fn snap_x(&self) -> Option<Pixel> {
        self.snap_happened.then_some(self.last_snap_x)
    }

    /// Playhead frame cached by the latest resolution.
    pub fn playhead_frame(&self) -> Option<Frame> {
        self.playhead_frame
    }

    pub(crate) fn cache_playhead(&mut self, frame: Frame) {
        self.playhead_frame = Some(frame);
    }

    pub(crate) fn record(&mut self, snap_x: Option<Pixel>) {
        match snap_x {
            Some(x) => {
                self.snap_happened = true;
                self.last_snap_x = x;
            }
            None => self.snap_happened = false,
        }
    }

    pub(crate) fn end_gesture(&mut self) {
        self.snap_happened = false;
    }
}
