//! Curve channel (F-Curve) type.

use actionkit_core::{ChannelId, CurveModifier, GroupId, KeyframeTrack};
use serde::{Deserialize, Serialize};

/// One curve of keyframed values for a property path/component.
///
/// The `(data_path, array_index)` pair identifies the animated property and is
/// fixed for the channel's lifetime. Group membership is managed by the
/// owning [`ChannelList`](crate::ChannelList) so that group runs stay contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    id: ChannelId,
    data_path: String,
    array_index: u32,
    pub(crate) group: Option<GroupId>,
    /// Authored keys.
    pub keys: KeyframeTrack,
    /// Modifier stack, evaluated first to last.
    pub modifiers: Vec<CurveModifier>,
    /// Channel is selected in the editor.
    pub select: bool,
    /// Channel does not contribute to evaluation.
    pub mute: bool,
    /// Channel is locked against editing.
    pub lock: bool,
    /// Channel is hidden in the graph editor.
    pub hide: bool,
}

impl Channel {
    /// Create a new ungrouped, selected channel with no keys.
    pub fn new(data_path: impl Into<String>, array_index: u32) -> Self {
        Self {
            id: ChannelId::new(),
            data_path: data_path.into(),
            array_index,
            group: None,
            keys: KeyframeTrack::new(),
            modifiers: Vec::new(),
            select: true,
            mute: false,
            lock: false,
            hide: false,
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn data_path(&self) -> &str {
        &self.data_path
    }

    pub fn array_index(&self) -> u32 {
        self.array_index
    }

    /// Group this channel belongs to, if any.
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    /// Whether this channel animates `data_path[array_index]`.
    pub fn matches(&self, data_path: &str, array_index: u32) -> bool {
        self.array_index == array_index && self.data_path == data_path
    }

    /// Frames covered by this channel, or `None` if it covers nothing.
    ///
    /// Keys always count. With `include_modifiers`, the last modifier on the
    /// stack may widen the extent, possibly up to the frame limits.
    pub fn frame_extent(&self, include_modifiers: bool) -> Option<(f32, f32)> {
        let keys = self.keys.frame_extent();
        let last = match self.modifiers.last() {
            Some(m) if include_modifiers => m,
            _ => return keys,
        };
        let (min, max) = last.widen_extent(keys.unwrap_or((f32::INFINITY, f32::NEG_INFINITY)));
        (min <= max).then_some((min, max))
    }
}
