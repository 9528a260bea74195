//! Curve modifiers, as far as the frame-range scan needs to know about them.
//!
//! Modifiers alter a curve procedurally and can make it extend well beyond its
//! authored keys. Only the range they can affect is modelled here.

use serde::{Deserialize, Serialize};

use crate::limits::{MAX_FRAME, MIN_FRAME};

/// Kind of procedural modifier on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Polynomial generator.
    Generator,
    /// Built-in function generator (sine, cosine, ...).
    FnGenerator,
    /// Envelope.
    Envelope,
    /// Repeats the keyed segment before and/or after it.
    Cycles { before: bool, after: bool },
    /// Random noise.
    Noise,
    /// Clamps values; does not affect the frame range.
    Limits,
    /// Stepped interpolation.
    Stepped,
}

/// A modifier attached to a curve channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveModifier {
    pub kind: ModifierKind,
    /// Frame range the modifier is restricted to, if any.
    pub restrict_range: Option<(f32, f32)>,
}

impl CurveModifier {
    /// Create an unrestricted modifier.
    pub fn new(kind: ModifierKind) -> Self {
        Self {
            kind,
            restrict_range: None,
        }
    }

    /// Restrict the modifier to `start..=end`; the endpoints are ordered.
    pub fn restricted(kind: ModifierKind, start: f32, end: f32) -> Self {
        Self {
            kind,
            restrict_range: Some((start.min(end), start.max(end))),
        }
    }

    /// Widen `(min, max)` by the frames this modifier can affect.
    ///
    /// Returns `(min, max)` unchanged for modifiers that never move the range.
    pub fn widen_extent(&self, (mut min, mut max): (f32, f32)) -> (f32, f32) {
        if let Some((start, end)) = self.restrict_range {
            return (min.min(start), max.max(end));
        }
        match self.kind {
            ModifierKind::Limits => {}
            ModifierKind::Cycles { before, after } => {
                if before {
                    min = MIN_FRAME;
                }
                if after {
                    max = MAX_FRAME;
                }
            }
            _ => {
                min = MIN_FRAME;
                max = MAX_FRAME;
            }
        }
        (min, max)
    }
}
