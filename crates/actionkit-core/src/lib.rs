//! ActionKit Core - Foundation types for animation actions
//!
//! This crate provides the types shared by the Action model:
//! - Stable handles for channels, groups and markers
//! - The error type reported to hosts
//! - Keyframe storage and curve modifiers
//! - Frame limits and authoring defaults

pub mod error;
pub mod ids;
pub mod keyframe;
pub mod modifier;

pub use error::{ActionError, Result};
pub use ids::{ChannelId, GroupId, MarkerId};
pub use keyframe::{Keyframe, KeyframeTrack};
pub use modifier::{CurveModifier, ModifierKind};

/// Frame limits and authoring defaults.
pub mod limits {
    /// Lowest frame an animation may reach.
    pub const MIN_FRAME: f32 = -1_048_574.0;

    /// Highest frame an animation may reach.
    pub const MAX_FRAME: f32 = 1_048_574.0;

    /// Frame assigned to newly created markers.
    pub const DEFAULT_MARKER_FRAME: i32 = 1;

    /// Name suggested to hosts for new groups.
    pub const DEFAULT_GROUP_NAME: &str = "Group";

    /// Name suggested to hosts for new markers.
    pub const DEFAULT_MARKER_NAME: &str = "Marker";
}
