//! Playback range of an Action: authored override or scan of channel content.

use actionkit_core::limits::{MAX_FRAME, MIN_FRAME};
use actionkit_core::{ActionError, Result};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;

/// Union of the frame extents of `channels`.
///
/// Modifiers are only considered with `include_modifiers`, since most of them
/// push the result out to the frame limits. Channels that cover nothing are
/// skipped; if none cover anything the result is `(0.0, 0.0)`.
pub fn scan_curve_extent(channels: &[Channel], include_modifiers: bool) -> (f32, f32) {
    channels
        .iter()
        .filter_map(|c| c.frame_extent(include_modifiers))
        .reduce(|(a0, a1), (b0, b1)| (a0.min(b0), a1.max(b1)))
        .map_or((0.0, 0.0), |(start, end)| {
            (start.max(MIN_FRAME), end.min(MAX_FRAME))
        })
}

/// Manually authored playback range.
///
/// `end >= start` holds after every setter; a write that would break it moves
/// the other endpoint instead of being rejected. Non-finite frames are
/// rejected with `InvalidArgument`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameRange {
    start: f32,
    end: f32,
    use_explicit: bool,
    cyclic: bool,
}

impl FrameRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored `(start, end)`, whether or not the override is enabled.
    pub fn stored(&self) -> (f32, f32) {
        (self.start, self.end)
    }

    pub fn is_explicit(&self) -> bool {
        self.use_explicit
    }

    /// The action is meant to loop over its manual range. Descriptive only.
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    pub fn set_cyclic(&mut self, cyclic: bool) {
        self.cyclic = cyclic;
    }

    /// Stored range if the override is enabled, otherwise `scan()`.
    pub fn effective(&self, scan: impl FnOnce() -> (f32, f32)) -> (f32, f32) {
        if self.use_explicit {
            (self.start, self.end)
        } else {
            scan()
        }
    }

    /// Enable the override and store both endpoints; `end` is raised to `start`.
    pub fn set(&mut self, start: f32, end: f32) -> Result<()> {
        check_frame("start", start)?;
        check_frame("end", end)?;
        self.use_explicit = true;
        self.start = start;
        self.end = end.max(start);
        Ok(())
    }

    /// Store `start`, raising `end` to it if needed.
    pub fn set_start(&mut self, start: f32) -> Result<()> {
        check_frame("start", start)?;
        self.start = start;
        self.end = self.end.max(start);
        Ok(())
    }

    /// Store `end`, lowering `start` to it if needed.
    pub fn set_end(&mut self, end: f32) -> Result<()> {
        check_frame("end", end)?;
        self.end = end;
        self.start = self.start.min(end);
        Ok(())
    }

    /// Toggle the override. Enabling a blank `(0, 0)` range seeds it from
    /// `scan()` first; disabling keeps the stored values.
    pub fn enable(&mut self, on: bool, scan: impl FnOnce() -> (f32, f32)) {
        if on {
            if self.start == 0.0 && self.end == 0.0 {
                let (start, end) = scan();
                self.start = start;
                self.end = end.max(start);
            }
            self.use_explicit = true;
        } else {
            self.use_explicit = false;
        }
    }
}

/// Non-finite frames would break `end >= start`.
fn check_frame(which: &str, frame: f32) -> Result<()> {
    if frame.is_finite() {
        Ok(())
    } else {
        Err(ActionError::InvalidArgument(format!(
            "frame range {which} must be finite, got {frame}"
        )))
    }
}
