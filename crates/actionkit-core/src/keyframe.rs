//! Keyframe storage for a single curve channel.
//!
//! Only the authored key positions live here. Evaluating the curve between
//! keys is the job of the host's animation system.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Keyframe ────────────────────────────────────────────────────

/// A single authored key on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Frame position of the key.
    pub frame: f32,
    /// Value at this key.
    pub value: f32,
    /// Key is selected in the editor.
    pub selected: bool,
}

impl Keyframe {
    /// Create a new unselected keyframe.
    pub fn new(frame: f32, value: f32) -> Self {
        Self {
            frame,
            value,
            selected: false,
        }
    }
}

// ── Keyframe track ──────────────────────────────────────────────

/// The keys of one channel, kept sorted by frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyframeTrack {
    keyframes: Vec<Keyframe>,
}

impl KeyframeTrack {
    /// Create a new empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a keyframe. Maintains sorted order.
    pub fn set(&mut self, frame: f32, value: f32) {
        if let Some(kf) = self.keyframes.iter_mut().find(|kf| kf.frame == frame) {
            kf.value = value;
            return;
        }
        let pos = self
            .keyframes
            .binary_search_by(|kf| kf.frame.total_cmp(&frame))
            .unwrap_or_else(|e| e);
        self.keyframes.insert(pos, Keyframe::new(frame, value));
    }

    /// Remove the keyframe at the given frame.
    pub fn remove(&mut self, frame: f32) -> bool {
        if let Some(pos) = self.keyframes.iter().position(|kf| kf.frame == frame) {
            self.keyframes.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drop every key.
    pub fn clear(&mut self) {
        self.keyframes.clear();
    }

    /// Get all keyframes (read-only).
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Whether the track has no keyframes.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// First and last key frame, or `None` when the track is empty.
    ///
    /// A single key yields a zero-length extent; no minimum length is applied.
    pub fn frame_extent(&self) -> Option<(f32, f32)> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;
        Some((first.frame, last.frame))
    }
}

impl fmt::Display for KeyframeTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyframeTrack({} keyframes)", self.keyframes.len())
    }
}

// ── Tests ───────────────────────────────────────────────────────
