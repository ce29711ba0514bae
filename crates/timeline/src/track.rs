use serde::{Deserialize, Serialize};

use crate::{Clip, Frame, TimelineError, TrackId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Video,
    Audio,
}

impl Default for TrackKind {
    fn default() -> Self {
        Self::Video
    }
}

/// Whether edit tools may change the clips on a track.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EditFreedom {
    Free,
    Locked,
}

impl Default for EditFreedom {
    fn default() -> Self {
        Self::Free
    }
}

/// Which media components of a track are silenced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrackMuteState {
    Nothing,
    Video,
    Audio,
    All,
}

impl Default for TrackMuteState {
    fn default() -> Self {
        Self::Nothing
    }
}

impl TrackMuteState {
    pub fn video_muted(self) -> bool {
        matches!(self, Self::Video | Self::All)
    }

    pub fn audio_muted(self) -> bool {
        matches!(self, Self::Audio | Self::All)
    }

    fn from_parts(video: bool, audio: bool) -> Self {
        match (video, audio) {
            (false, false) => Self::Nothing,
            (true, false) => Self::Video,
            (false, true) => Self::Audio,
            (true, true) => Self::All,
        }
    }

    /// Flip the video component, leaving audio as it is.
    pub fn toggle_video(self) -> Self {
        Self::from_parts(!self.video_muted(), self.audio_muted())
    }

    /// Flip the audio component, leaving video as it is.
    pub fn toggle_audio(self) -> Self {
        Self::from_parts(self.video_muted(), !self.audio_muted())
    }
}

/// An ordered run of clips laid end to end, starting at frame 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub kind: TrackKind,
    #[serde(default)]
    pub clips: Vec<Clip>,
    #[serde(default)]
    pub edit_freedom: EditFreedom,
    #[serde(default)]
    pub mute_state: TrackMuteState,
}

impl Track {
    pub fn new(id: TrackId, kind: TrackKind) -> Self {
        Self {
            id,
            kind,
            clips: Vec::new(),
            edit_freedom: EditFreedom::Free,
            mute_state: TrackMuteState::Nothing,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.edit_freedom == EditFreedom::Locked
    }

    /// Adds `clip` after the last clip. Clips shorter than one frame are
    /// rejected since every later clip start depends on their length.
    pub fn append_clip(&mut self, clip: Clip) -> Result<(), TimelineError> {
        if clip.length() < 1 {
            return Err(TimelineError::InvalidOp(format!(
                "clip out {} is before clip in {}",
                clip.clip_out, clip.clip_in
            )));
        }
        self.clips.push(clip);
        Ok(())
    }

    pub fn append_blank(&mut self, length: Frame) -> Result<(), TimelineError> {
        if length < 1 {
            return Err(TimelineError::InvalidOp(format!(
                "blank length must be at least one frame, got {length}"
            )));
        }
        self.clips.push(Clip::blank(length));
        Ok(())
    }

    /// Timeline frame where the clip at `index` begins. Indices past the end
    /// give the track length.
    pub fn clip_start(&self, index: usize) -> Frame {
        self.clips
            .iter()
            .take(index)
            .map(Clip::length)
            .sum()
    }

    pub fn length(&self) -> Frame {
        self.clips.iter().map(Clip::length).sum()
    }

    /// Index of the clip covering `frame`, if any.
    pub fn clip_index_at(&self, frame: Frame) -> Option<usize> {
        if frame < 0 {
            return None;
        }
        let mut start = 0;
        for (index, clip) in self.clips.iter().enumerate() {
            let end = start + clip.length();
            if frame < end {
                return Some(index);
            }
            start = end;
        }
        None
    }

    /// Nearest clip boundary to `frame`.
    ///
    /// Inside a clip this is whichever of its start or end is closer, with
    /// the start winning a tie. Past the last clip it is the track end, and
    /// before frame 0 it is the first clip's start.
    pub fn closest_cut_frame(&self, frame: Frame) -> Option<Frame> {
        if self.clips.is_empty() {
            return None;
        }
        if frame < 0 {
            return Some(0);
        }
        let Some(index) = self.clip_index_at(frame) else {
            return Some(self.length());
        };

        let start = self.clip_start(index);
        let end = start + self.clips[index].length();
        if frame - start <= end - frame {
            Some(start)
        } else {
            Some(end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_with(lengths: &[Frame]) -> Track {
        let mut track = Track::new(1, TrackKind::Video);
        for (i, len) in lengths.iter().enumerate() {
            track
                .append_clip(Clip::new(format!("clip {i}"), 0, len - 1))
                .unwrap();
        }
        track
    }

    #[test]
    fn clip_start_and_length() {
        let track = track_with(&[100, 50, 25]);
        assert_eq!(track.clip_start(0), 0);
        assert_eq!(track.clip_start(1), 100);
        assert_eq!(track.clip_start(2), 150);
        assert_eq!(track.clip_start(9), 175);
        assert_eq!(track.length(), 175);
    }

    #[test]
    fn clip_index_lookup() {
        let track = track_with(&[100, 50]);
        assert_eq!(track.clip_index_at(0), Some(0));
        assert_eq!(track.clip_index_at(99), Some(0));
        assert_eq!(track.clip_index_at(100), Some(1));
        assert_eq!(track.clip_index_at(150), None);
        assert_eq!(track.clip_index_at(-1), None);
    }

    #[test]
    fn closest_cut_picks_nearer_edge() {
        let track = track_with(&[100, 50]);
        assert_eq!(track.closest_cut_frame(10), Some(0));
        assert_eq!(track.closest_cut_frame(97), Some(100));
        assert_eq!(track.closest_cut_frame(130), Some(150));
        // tie inside the second clip goes to its start
        assert_eq!(track.closest_cut_frame(125), Some(100));
    }

    #[test]
    fn closest_cut_outside_clips() {
        let track = track_with(&[100]);
        assert_eq!(track.closest_cut_frame(400), Some(100));
        assert_eq!(track.closest_cut_frame(-20), Some(0));
        assert_eq!(Track::new(2, TrackKind::Audio).closest_cut_frame(10), None);
    }

    #[test]
    fn blanks_contribute_cut_points() {
        let mut track = Track::new(1, TrackKind::Video);
        track.append_blank(40).unwrap();
        track.append_clip(Clip::new("a", 0, 59)).unwrap();
        assert_eq!(track.closest_cut_frame(38), Some(40));
    }

    #[test]
    fn append_rejects_empty_and_inverted_clips() {
        let mut track = Track::new(1, TrackKind::Video);
        assert!(matches!(
            track.append_blank(-20),
            Err(TimelineError::InvalidOp(_))
        ));
        assert!(matches!(
            track.append_blank(0),
            Err(TimelineError::InvalidOp(_))
        ));
        assert!(matches!(
            track.append_clip(Clip::new("backwards", 50, 10)),
            Err(TimelineError::InvalidOp(_))
        ));
        assert!(track.clips.is_empty());

        // rejected appends leave the cut points where they were
        track.append_clip(Clip::new("a", 0, 99)).unwrap();
        assert!(track.append_blank(-20).is_err());
        assert_eq!(track.clip_start(1), 100);
        assert_eq!(track.closest_cut_frame(5), Some(0));
        assert_eq!(track.closest_cut_frame(150), Some(100));

        // a single frame clip is fine
        track.append_clip(Clip::new("b", 7, 7)).unwrap();
        assert_eq!(track.length(), 101);
    }

    #[test]
    fn mute_toggles_keep_other_component() {
        let state = TrackMuteState::Nothing.toggle_video();
        assert_eq!(state, TrackMuteState::Video);
        let state = state.toggle_audio();
        assert_eq!(state, TrackMuteState::All);
        let state = state.toggle_video();
        assert_eq!(state, TrackMuteState::Audio);
        assert_eq!(state.toggle_audio(), TrackMuteState::Nothing);
    }
}
