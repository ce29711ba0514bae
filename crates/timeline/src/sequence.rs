use serde::{Deserialize, Serialize};

use crate::{Frame, TimelineError, Track, TrackId, TrackKind};

/// A stack of tracks.
///
/// Slot 0 and the last slot are boundary tracks that hold no user media.
/// Audio tracks sit directly above slot 0 and video tracks above them, so a
/// higher id is always stacked higher. A track's `id` equals its slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sequence {
    pub name: String,
    pub tracks: Vec<Track>,
}

impl Sequence {
    pub fn new(name: impl Into<String>, audio_tracks: usize, video_tracks: usize) -> Self {
        let mut tracks = Vec::with_capacity(audio_tracks + video_tracks + 2);
        tracks.push(Track::new(0, TrackKind::Audio));
        for _ in 0..audio_tracks {
            tracks.push(Track::new(tracks.len(), TrackKind::Audio));
        }
        for _ in 0..video_tracks {
            tracks.push(Track::new(tracks.len(), TrackKind::Video));
        }
        tracks.push(Track::new(tracks.len(), TrackKind::Video));

        Self {
            name: name.into(),
            tracks,
        }
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id)
    }

    pub fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.get_mut(id)
    }

    /// True for every slot that is neither the bottom nor the top boundary.
    pub fn is_editable_slot(&self, id: TrackId) -> bool {
        id > 0 && id + 1 < self.tracks.len()
    }

    /// Editable tracks, lowest slot first.
    pub fn editable_tracks(&self) -> impl Iterator<Item = &Track> + '_ {
        let end = self.tracks.len().saturating_sub(1);
        self.tracks.iter().take(end).skip(1)
    }

    /// Lowest video track slot, if the sequence has any video tracks.
    pub fn first_video_track(&self) -> Option<TrackId> {
        self.editable_tracks()
            .find(|t| t.kind == TrackKind::Video)
            .map(|t| t.id)
    }

    pub fn track_above(&self, id: TrackId) -> Option<&Track> {
        if self.is_editable_slot(id + 1) {
            self.tracks.get(id + 1)
        } else {
            None
        }
    }

    pub fn track_below(&self, id: TrackId) -> Option<&Track> {
        if id > 1 {
            self.tracks.get(id - 1)
        } else {
            None
        }
    }

    pub fn closest_cut_frame(&self, track_id: TrackId, frame: Frame) -> Option<Frame> {
        self.track(track_id)?.closest_cut_frame(frame)
    }

    /// Resolves `id` to an editable track, rejecting boundary slots.
    pub(crate) fn editable_track_mut(&mut self, id: TrackId) -> Result<&mut Track, TimelineError> {
        if id >= self.tracks.len() {
            return Err(TimelineError::TrackNotFound(id));
        }
        if !self.is_editable_slot(id) {
            return Err(TimelineError::BoundaryTrack(id));
        }
        Ok(&mut self.tracks[id])
    }
}
