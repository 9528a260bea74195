//! Descriptions of what a mutation changed.
//!
//! The Action never calls out to the host. It records one `ActionChange` per
//! effect, and an adapter such as [`NotifyingAction`](crate::NotifyingAction)
//! turns them into dependency tags and UI events.

use actionkit_core::{ChannelId, GroupId, MarkerId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Which part of a group an edit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupAspect {
    /// Name, lock or mute.
    Content,
    /// Selection state.
    Selection,
    /// Expansion, pinning or color set. Never affects evaluation.
    Display,
}

/// A single effect of a successful mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionChange {
    GroupAdded {
        group: GroupId,
    },
    /// A group was removed; `relocated` channels moved to the ungrouped tail.
    GroupRemoved {
        group: GroupId,
        relocated: usize,
    },
    /// Group name, flags or colors were edited.
    GroupEdited {
        group: GroupId,
        aspect: GroupAspect,
    },
    ChannelAdded {
        channel: ChannelId,
        group: Option<GroupId>,
    },
    ChannelRemoved {
        channel: ChannelId,
    },
    /// Keys, modifiers or flags of a channel were edited.
    ChannelEdited {
        channel: ChannelId,
    },
    ChannelsCleared {
        count: usize,
    },
    MarkerAdded {
        marker: MarkerId,
    },
    MarkerRemoved {
        marker: MarkerId,
    },
    MarkerEdited {
        marker: MarkerId,
    },
    ActiveMarkerChanged {
        marker: Option<MarkerId>,
    },
    /// Manual range, its override flag, or the cyclic flag changed.
    FrameRangeChanged {
        start: f32,
        end: f32,
        explicit: bool,
    },
    /// Action-level settings such as the ID root changed.
    SettingsChanged,
}

impl ActionChange {
    /// Whether the change alters what the action evaluates to.
    pub fn affects_evaluation(&self) -> bool {
        matches!(
            self,
            Self::GroupAdded { .. }
                | Self::GroupRemoved { .. }
                | Self::GroupEdited {
                    aspect: GroupAspect::Content,
                    ..
                }
                | Self::ChannelAdded { .. }
                | Self::ChannelRemoved { .. }
                | Self::ChannelEdited { .. }
                | Self::ChannelsCleared { .. }
        )
    }

    /// Fold `next` into `self` when it repeats the same edit.
    ///
    /// Range and active-marker changes keep the newest values. Returns whether
    /// `next` was absorbed.
    pub fn coalesce(&mut self, next: &ActionChange) -> bool {
        if std::mem::discriminant(&*self) != std::mem::discriminant(next) {
            return false;
        }
        match self {
            Self::ChannelEdited { .. }
            | Self::GroupEdited { .. }
            | Self::MarkerEdited { .. }
            | Self::SettingsChanged => *self == *next,
            Self::FrameRangeChanged { .. } | Self::ActiveMarkerChanged { .. } => {
                *self = next.clone();
                true
            }
            _ => false,
        }
    }
}

/// Changes produced by one or a few calls. Most calls produce one or two.
pub type ChangeSet = SmallVec<[ActionChange; 4]>;
