use tracing::{debug, trace, warn};

use crate::{
    CompositorMoveData, CompositorSubMode, EditData, EditMode, Frame, OverwriteBoxData,
    OverwriteMoveData, Pixel, SnapEnvironment, SnapError, SnapSettings, SnapState, SpacerMoveData,
    TrackId, TrimData,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapSource {
    Track(TrackId),
    Playhead,
}

/// A successful snap: `x` is the corrected pointer position, `snap_x` the
/// cut or playhead position the dragged edge now sits on.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SnapMatch {
    x: Pixel,
    snap_x: Pixel,
    source: SnapSource,
}

/// Snaps dragged edges to cuts and the playhead.
///
/// Call [`get_snapped_x`](Self::get_snapped_x) on every pointer move of a
/// drag and [`mouse_edit_ended`](Self::mouse_edit_ended) when it ends. Which
/// edges are tested depends on the environment's current [`EditMode`]:
///
/// | mode | edges | sources |
/// |---|---|---|
/// | overwrite move / box | leading, trailing | nearby tracks, then playhead |
/// | clip end drag, compositor trim | dragged edge | nearby tracks, then playhead |
/// | compositor move | in, else out | nearby tracks |
/// | one / two roll trim | frame under pointer | nearby tracks |
/// | spacer | first moved clip start | every editable track |
///
/// "Nearby tracks" are the tracks above and below plus the edge's own
/// track. When several match, the own track wins, then the one below.
/// The spacer scans tracks bottom up and stops at the first match.
pub struct SnapResolver<E> {
    env: E,
    settings: SnapSettings,
    state: SnapState,
}

impl<E: SnapEnvironment> SnapResolver<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            settings: SnapSettings::default(),
            state: SnapState::default(),
        }
    }

    pub fn with_settings(env: E, settings: SnapSettings) -> Result<Self, SnapError> {
        settings.validate()?;
        Ok(Self {
            env,
            settings,
            state: SnapState::default(),
        })
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn settings(&self) -> &SnapSettings {
        &self.settings
    }

    pub fn apply_settings(&mut self, settings: SnapSettings) -> Result<(), SnapError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn state(&self) -> &SnapState {
        &self.state
    }

    pub fn snapping_enabled(&self) -> bool {
        self.settings.enabled
    }

    pub fn set_snapping_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
        debug!(enabled = enabled, "snapping toggled");
    }

    /// Whether the latest [`get_snapped_x`](Self::get_snapped_x) snapped.
    pub fn snap_active(&self) -> bool {
        self.state.snap_active()
    }

    /// Where the latest snap landed, if there was one.
    pub fn get_snap_x(&self) -> Option<Pixel> {
        self.state.snap_x()
    }

    pub fn playhead_frame(&self) -> Option<Frame> {
        self.state.playhead_frame()
    }

    pub fn mouse_edit_ended(&mut self) {
        self.state.end_gesture();
        debug!("snap gesture ended");
    }

    /// Corrects the pointer position `x` so the dragged edge lands on a cut
    /// or the playhead, or returns `x` unchanged when nothing is in range.
    ///
    /// `track` is the track under the pointer and `edit_data` the drag in
    /// progress. If either is missing, or `edit_data` does not belong to the
    /// current edit mode, nothing snaps. Trim and box drags write the
    /// resulting frame back into `edit_data`.
    pub fn get_snapped_x(
        &mut self,
        x: Pixel,
        track: Option<TrackId>,
        edit_data: Option<&mut EditData>,
    ) -> Pixel {
        if !self.settings.enabled {
            return x;
        }

        let frame = self.env.x_to_frame(x);
        self.state.cache_playhead(self.env.current_playhead_frame());
        let mode = self.env.current_edit_mode();

        let (Some(track), Some(edit_data)) = (track, edit_data) else {
            return self.commit(x, None);
        };
        debug_assert!(
            track < self.env.track_count(),
            "track {track} is not on this timeline"
        );

        match (mode, edit_data) {
            (EditMode::OverwriteMove, EditData::OverwriteMove(data)) => {
                let snap = self.overwrite_move_snap(x, track, frame, *data);
                self.commit(x, snap)
            }
            (EditMode::OverwriteMove, EditData::OverwriteBox(data)) => {
                self.overwrite_box_snap(x, track, frame, data)
            }
            (EditMode::ClipEndDrag, EditData::ClipEndDrag) => {
                let snap = self.edge_snap(x, track, frame);
                self.commit(x, snap)
            }
            (EditMode::CompositorEdit(CompositorSubMode::Trim), EditData::CompositorTrim(data)) => {
                // compositor out frames are one less than the clip out frame they line up with
                let frame = if data.trim_is_clip_in { frame } else { frame.saturating_add(1) };
                let snap = self.edge_snap(x, data.track, frame);
                self.commit(x, snap)
            }
            (EditMode::CompositorEdit(CompositorSubMode::Move), EditData::CompositorMove(data)) => {
                let snap = self.compositor_move_snap(x, frame, *data);
                self.commit(x, snap)
            }
            (EditMode::OneRollTrim | EditMode::TwoRollTrim, EditData::Trim(data)) => {
                self.trimming_snap(x, track, data)
            }
            (EditMode::MultiMove, EditData::SpacerMove(data)) => {
                let snap = self.spacer_move_snap(x, frame, *data);
                self.commit(x, snap)
            }
            (mode, _) if !mode.has_snapping() => self.commit(x, None),
            (mode, data) => {
                warn!(
                    mode = mode.name(),
                    edit_data = data.kind_name(),
                    "edit data does not belong to edit mode, not snapping"
                );
                self.commit(x, None)
            }
        }
    }

    fn commit(&mut self, x: Pixel, snap: Option<SnapMatch>) -> Pixel {
        self.state.record(snap.map(|m| m.snap_x));
        match snap {
            Some(m) => {
                trace!(x = x, snapped_x = m.x, snap_x = m.snap_x, source = ?m.source, "snapped");
                m.x
            }
            None => {
                trace!(x = x, "no snap");
                x
            }
        }
    }

    // ---- edit mode strategies

    fn overwrite_move_snap(
        &self,
        x: Pixel,
        track: TrackId,
        frame: Frame,
        data: OverwriteMoveData,
    ) -> Option<SnapMatch> {
        let first_clip_frame = dragged(data.first_clip_start, frame, data.press_frame);
        let last_clip_frame = first_clip_frame.saturating_add(data.moving_length);
        self.leading_trailing_snap(x, track, first_clip_frame, last_clip_frame)
    }

    fn overwrite_box_snap(
        &mut self,
        x: Pixel,
        track: TrackId,
        frame: Frame,
        data: &mut OverwriteBoxData,
    ) -> Pixel {
        let Some(selection) = data.selection else {
            return self.commit(x, None);
        };

        let frame_1 = dragged(selection.topleft_frame, frame, data.press_frame);
        let frame_2 = frame_1.saturating_add(selection.width_frames);
        let snap = self.leading_trailing_snap(x, track, frame_1, frame_2);

        let out = self.commit(x, snap);
        data.snapped_frame = Some(self.env.x_to_frame(out));
        out
    }

    fn compositor_move_snap(
        &self,
        x: Pixel,
        frame: Frame,
        data: CompositorMoveData,
    ) -> Option<SnapMatch> {
        let comp_in_frame = dragged(data.clip_in, frame, data.press_frame);
        let comp_in_x = self.env.frame_to_x(comp_in_frame);

        self.three_track_snap(x, data.track, comp_in_frame, comp_in_x)
            .or_else(|| {
                let comp_out_frame = comp_in_frame.saturating_add(data.clip_length);
                let comp_out_x = self.env.frame_to_x(comp_out_frame);
                self.three_track_snap(x, data.track, comp_out_frame, comp_out_x)
            })
    }

    fn trimming_snap(&mut self, x: Pixel, track: TrackId, data: &mut TrimData) -> Pixel {
        let selected_frame = self.env.x_to_frame(x);
        let selected_frame_x = self.env.frame_to_x(selected_frame);
        let snap = self.three_track_snap(x, track, selected_frame, selected_frame_x);

        let out = self.commit(x, snap);
        data.selected_frame = self.env.x_to_frame(out);
        out
    }

    fn spacer_move_snap(&self, x: Pixel, frame: Frame, data: SpacerMoveData) -> Option<SnapMatch> {
        let move_frame = dragged(data.first_moved_frame, frame, data.press_frame);
        let move_frame_x = self.env.frame_to_x(move_frame);
        self.all_tracks_snap(x, move_frame, move_frame_x)
    }

    // ---- snap sources

    /// Both edges are tested; the trailing edge wins if both snap.
    fn leading_trailing_snap(
        &self,
        x: Pixel,
        track: TrackId,
        leading: Frame,
        trailing: Frame,
    ) -> Option<SnapMatch> {
        let leading = self.edge_snap(x, track, leading);
        let trailing = self.edge_snap(x, track, trailing);
        trailing.or(leading)
    }

    /// Cuts on nearby tracks first, the playhead only if none is in range.
    fn edge_snap(&self, x: Pixel, track: TrackId, frame: Frame) -> Option<SnapMatch> {
        let frame_x = self.env.frame_to_x(frame);
        self.three_track_snap(x, track, frame, frame_x)
            .or_else(|| self.playhead_snap(x, frame_x))
    }

    fn three_track_snap(
        &self,
        x: Pixel,
        track: TrackId,
        frame: Frame,
        frame_x: Pixel,
    ) -> Option<SnapMatch> {
        let above = self
            .env
            .track_above(track)
            .and_then(|t| self.track_snap(x, t, frame, frame_x));
        let below = self
            .env
            .track_below(track)
            .and_then(|t| self.track_snap(x, t, frame, frame_x));
        let own = self.track_snap(x, track, frame, frame_x);

        own.or(below).or(above)
    }

    fn all_tracks_snap(&self, x: Pixel, frame: Frame, frame_x: Pixel) -> Option<SnapMatch> {
        self.env
            .editable_tracks()
            .find_map(|t| self.track_snap(x, t, frame, frame_x))
    }

    fn track_snap(
        &self,
        x: Pixel,
        track: TrackId,
        frame: Frame,
        frame_x: Pixel,
    ) -> Option<SnapMatch> {
        let cut_frame = self.env.closest_cut_frame(track, frame)?;
        let cut_frame_x = self.env.frame_to_x(cut_frame);
        self.snap_to(x, frame_x, cut_frame_x, SnapSource::Track(track))
    }

    fn playhead_snap(&self, x: Pixel, feature_x: Pixel) -> Option<SnapMatch> {
        if !self.settings.snap_to_playhead {
            return None;
        }
        let playhead_x = self.env.frame_to_x(self.state.playhead_frame()?);
        self.snap_to(x, feature_x, playhead_x, SnapSource::Playhead)
    }

    /// Shifts `x` by however far `feature_x` is from `target_x`, if that is
    /// under the threshold.
    fn snap_to(
        &self,
        x: Pixel,
        feature_x: Pixel,
        target_x: Pixel,
        source: SnapSource,
    ) -> Option<SnapMatch> {
        ((target_x - feature_x).abs() < self.settings.threshold_px).then(|| SnapMatch {
            x: x - (feature_x - target_x),
            snap_x: target_x,
            source,
        })
    }
}

/// Where `start` has moved to once the pointer went from `press_frame` to
/// `frame`. Saturates so far-off pointer frames cannot overflow.
fn dragged(start: Frame, frame: Frame, press_frame: Frame) -> Frame {
    start.saturating_add(frame.saturating_sub(press_frame))
}
