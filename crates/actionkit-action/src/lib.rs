//! ActionKit Action - Channel collection of an animation action
//!
//! Implements the in-memory model of an Action:
//! - An ordered channel list partitioned into contiguous groups
//! - Pose markers with an active selection
//! - Manual and curve-derived playback ranges
//! - Change descriptions and a host notification adapter

pub mod action;
pub mod change;
pub mod channel;
pub mod channels;
pub mod group;
pub mod id_root;
pub mod markers;
pub mod notify;
pub mod range;

pub use action::Action;
pub use change::{ActionChange, ChangeSet, GroupAspect};
pub use channel::Channel;
pub use channels::ChannelList;
pub use group::{ColorSet, Group, GroupColors};
pub use id_root::{ActionEditorMode, IdRoot};
pub use markers::{Marker, MarkerCollection};
pub use notify::{HostNotifier, NotifyingAction, Recalc, RecordingNotifier, UiAction, UiCategory, UiEvent};
pub use range::{scan_curve_extent, FrameRange};
