use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::Frame;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ClipId(pub Uuid);

impl ClipId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClipId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A media segment placed on a track.
///
/// `clip_in` and `clip_out` are media frames and both are inclusive, so a
/// clip with `clip_in == clip_out` is one frame long.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clip {
    pub id: ClipId,
    pub name: String,
    pub clip_in: Frame,
    pub clip_out: Frame,
    #[serde(default)]
    pub is_blank: bool,
    #[serde(default)]
    pub muted: bool,
}

impl Clip {
    pub fn new(name: impl Into<String>, clip_in: Frame, clip_out: Frame) -> Self {
        Self {
            id: ClipId::new(),
            name: name.into(),
            clip_in,
            clip_out,
            is_blank: false,
            muted: false,
        }
    }

    /// Empty space between media clips. Blanks are clips too, so their
    /// edges count as cut points.
    pub fn blank(length: Frame) -> Self {
        Self {
            id: ClipId::new(),
            name: String::new(),
            clip_in: 0,
            clip_out: length - 1,
            is_blank: true,
            muted: false,
        }
    }

    pub fn length(&self) -> Frame {
        self.clip_out - self.clip_in + 1
    }

    /// Splits the clip so that `cut_frame` (a media frame) becomes the first
    /// frame of the returned right half. `self` keeps the left half.
    pub(crate) fn split_at(&mut self, cut_frame: Frame) -> Clip {
        let right = Clip {
            id: ClipId::new(),
            name: self.name.clone(),
            clip_in: cut_frame,
            clip_out: self.clip_out,
            is_blank: self.is_blank,
            muted: self.muted,
        };
        self.clip_out = cut_frame - 1;
        right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_inclusive() {
        let clip = Clip::new("a", 10, 19);
        assert_eq!(clip.length(), 10);
        assert_eq!(Clip::blank(5).length(), 5);
    }

    #[test]
    fn split_keeps_total_length() {
        let mut left = Clip::new("a", 10, 19);
        let right = left.split_at(14);

        assert_eq!((left.clip_in, left.clip_out), (10, 13));
        assert_eq!((right.clip_in, right.clip_out), (14, 19));
        assert_eq!(left.length() + right.length(), 10);
        assert_ne!(left.id, right.id);
        assert_eq!(right.name, "a");
    }
}
