//! Cut, lock and mute edits on a sequence.
//!
//! These mutate the model directly; the caller decides how to record them.

use tracing::debug;

use crate::{EditFreedom, Frame, Sequence, TimelineError, TrackId, TrackMuteState};

/// Where a cut would land: the clip at `index` on `track` is split so that
/// media frame `clip_cut_frame` starts the new right-hand clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutData {
    pub track: TrackId,
    pub index: usize,
    pub clip_cut_frame: Frame,
}

/// Result of cutting every editable track at one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutOutcome {
    pub cut: Vec<CutData>,
    pub skipped_locked: Vec<TrackId>,
}

/// Works out whether `frame` can be cut on `track_id`.
///
/// There is nothing to cut on blank clips, past the end of the track, or
/// exactly on an existing cut.
pub fn cut_data(sequence: &Sequence, track_id: TrackId, frame: Frame) -> Option<CutData> {
    let track = sequence.track(track_id)?;
    let index = track.clip_index_at(frame)?;
    let clip = &track.clips[index];
    if clip.is_blank {
        return None;
    }

    let clip_cut_frame = frame - track.clip_start(index) + clip.clip_in;
    if clip_cut_frame == clip.clip_in {
        return None;
    }

    Some(CutData {
        track: track_id,
        index,
        clip_cut_frame,
    })
}

fn apply_cut(sequence: &mut Sequence, data: CutData) {
    let track = &mut sequence.tracks[data.track];
    let right = track.clips[data.index].split_at(data.clip_cut_frame);
    track.clips.insert(data.index + 1, right);
    debug!(
        track = data.track,
        index = data.index,
        clip_cut_frame = data.clip_cut_frame,
        "cut clip"
    );
}

/// Cut the clip under `frame` on a single track.
///
/// Returns `Ok(None)` when the frame has nothing to cut.
pub fn cut_track(
    sequence: &mut Sequence,
    track_id: TrackId,
    frame: Frame,
) -> Result<Option<CutData>, TimelineError> {
    let track = sequence.editable_track_mut(track_id)?;
    if track.is_locked() {
        return Err(TimelineError::TrackLocked(track_id));
    }

    let Some(data) = cut_data(sequence, track_id, frame) else {
        return Ok(None);
    };
    apply_cut(sequence, data);
    Ok(Some(data))
}

/// Cut every editable track at `frame`. Locked tracks are left alone.
pub fn cut_all_tracks(sequence: &mut Sequence, frame: Frame) -> CutOutcome {
    let mut outcome = CutOutcome::default();
    let mut planned = Vec::new();

    for track in sequence.editable_tracks() {
        if track.is_locked() {
            outcome.skipped_locked.push(track.id);
            continue;
        }
        if let Some(data) = cut_data(sequence, track.id, frame) {
            planned.push(data);
        }
    }

    for data in planned {
        apply_cut(sequence, data);
        outcome.cut.push(data);
    }
    outcome
}

pub fn lock_track(sequence: &mut Sequence, track_id: TrackId) -> Result<(), TimelineError> {
    sequence.editable_track_mut(track_id)?.edit_freedom = EditFreedom::Locked;
    debug!(track = track_id, "locked track");
    Ok(())
}

pub fn unlock_track(sequence: &mut Sequence, track_id: TrackId) -> Result<(), TimelineError> {
    sequence.editable_track_mut(track_id)?.edit_freedom = EditFreedom::Free;
    debug!(track = track_id, "unlocked track");
    Ok(())
}

/// Replace a track's mute state, returning the previous one.
pub fn set_track_mute_state(
    sequence: &mut Sequence,
    track_id: TrackId,
    state: TrackMuteState,
) -> Result<TrackMuteState, TimelineError> {
    let track = sequence.editable_track_mut(track_id)?;
    let previous = std::mem::replace(&mut track.mute_state, state);
    debug!(track = track_id, ?previous, ?state, "track mute state changed");
    Ok(previous)
}

pub fn set_clip_muted(
    sequence: &mut Sequence,
    track_id: TrackId,
    index: usize,
    muted: bool,
) -> Result<(), TimelineError> {
    let track = sequence.editable_track_mut(track_id)?;
    if track.is_locked() {
        return Err(TimelineError::TrackLocked(track_id));
    }
    let clip = track
        .clips
        .get_mut(index)
        .ok_or(TimelineError::ClipNotFound {
            track: track_id,
            index,
        })?;
    if clip.is_blank {
        return Err(TimelineError::InvalidOp("blank clips cannot be muted".to_string()));
    }
    clip.muted = muted;
    Ok(())
}
