//! What the resolver needs to know about the editor around it.

use std::ops::Range;

use timeline::Sequence;

use crate::{EditMode, Frame, Pixel, TrackId};

/// Pixel/frame mapping of the timeline view. Changes with zoom and scroll.
pub trait CoordinateMap {
    fn x_to_frame(&self, x: Pixel) -> Frame;
    fn frame_to_x(&self, frame: Frame) -> Pixel;
}

/// Read access to the track stack.
///
/// Track ids are slot indices. Slot 0 and slot `track_count() - 1` are
/// boundary markers, not real tracks.
pub trait TimelineQuery {
    fn track_count(&self) -> usize;

    /// Nearest clip boundary on `track` to `frame`.
    fn closest_cut_frame(&self, track: TrackId, frame: Frame) -> Option<Frame>;

    /// Editable slots, lowest first.
    fn editable_tracks(&self) -> Range<TrackId> {
        1..self.track_count().saturating_sub(1).max(1)
    }

    fn track_above(&self, track: TrackId) -> Option<TrackId> {
        (track + 2 < self.track_count()).then(|| track + 1)
    }

    fn track_below(&self, track: TrackId) -> Option<TrackId> {
        (track > 1).then(|| track - 1)
    }
}

/// Editor-wide state owned by the mode controller and the player.
pub trait EditorState {
    fn current_edit_mode(&self) -> EditMode;
    fn current_playhead_frame(&self) -> Frame;
}

/// Everything a [`SnapResolver`](crate::SnapResolver) reads.
pub trait SnapEnvironment: CoordinateMap + TimelineQuery + EditorState {}

impl<T: CoordinateMap + TimelineQuery + EditorState> SnapEnvironment for T {}

impl<T: CoordinateMap + ?Sized> CoordinateMap for &T {
    fn x_to_frame(&self, x: Pixel) -> Frame {
        (**self).x_to_frame(x)
    }

    fn frame_to_x(&self, frame: Frame) -> Pixel {
        (**self).frame_to_x(frame)
    }
}

impl<T: TimelineQuery + ?Sized> TimelineQuery for &T {
    fn track_count(&self) -> usize {
        (**self).track_count()
    }

    fn closest_cut_frame(&self, track: TrackId, frame: Frame) -> Option<Frame> {
        (**self).closest_cut_frame(track, frame)
    }
}

impl<T: EditorState + ?Sized> EditorState for &T {
    fn current_edit_mode(&self) -> EditMode {
        (**self).current_edit_mode()
    }

    fn current_playhead_frame(&self) -> Frame {
        (**self).current_playhead_frame()
    }
}

impl TimelineQuery for Sequence {
    fn track_count(&self) -> usize {
        self.tracks.len()
    }

    fn closest_cut_frame(&self, track: TrackId, frame: Frame) -> Option<Frame> {
        Sequence::closest_cut_frame(self, track, frame)
    }
}
