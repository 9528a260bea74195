//! Channel groups.

use actionkit_core::GroupId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::change::GroupAspect;

/// Number of theme color sets a group can use.
pub const THEME_COLOR_SETS: u8 = 20;

/// Colors for a group with a custom color set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupColors {
    /// Unselected channels.
    pub normal: [u8; 3],
    /// Selected channels.
    pub select: [u8; 3],
    /// The active channel.
    pub active: [u8; 3],
}

/// Color set used to draw a group's channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSet {
    /// Editor default colors.
    #[default]
    Default,
    /// One of the theme color sets, numbered from 1.
    Theme(u8),
    Custom(GroupColors),
}

impl ColorSet {
    /// Theme color set `index`, or `None` outside `1..=THEME_COLOR_SETS`.
    pub fn theme(index: u8) -> Option<Self> {
        (1..=THEME_COLOR_SETS)
            .contains(&index)
            .then_some(Self::Theme(index))
    }
}

/// A named, contiguous partition of an Action's channel list.
///
/// The group stores no range: its channels are the ones whose back-reference
/// names it, and those always sit next to each other in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    /// Display name. Not required to be unique.
    pub name: String,
    /// Group is selected.
    pub select: bool,
    /// Group is locked against editing.
    pub lock: bool,
    /// Group is muted.
    pub mute: bool,
    /// Group is expanded in channel lists other than the graph editor.
    pub show_expanded: bool,
    /// Group is expanded in the graph editor.
    pub show_expanded_graph: bool,
    /// Group's curves stay visible in the graph editor.
    pub use_pin: bool,
    /// Colors used to draw the group's channels.
    pub color_set: ColorSet,
}

impl Group {
    /// Create a new selected, collapsed group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            select: true,
            lock: false,
            mute: false,
            show_expanded: false,
            show_expanded_graph: false,
            use_pin: false,
            color_set: ColorSet::Default,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Which aspects differ from an earlier copy of this group.
    pub(crate) fn edited_aspects(&self, before: &Group) -> SmallVec<[GroupAspect; 3]> {
        let mut aspects = SmallVec::new();
        if self.name != before.name || self.lock != before.lock || self.mute != before.mute {
            aspects.push(GroupAspect::Content);
        }
        if self.select != before.select {
            aspects.push(GroupAspect::Selection);
        }
        if self.show_expanded != before.show_expanded
            || self.show_expanded_graph != before.show_expanded_graph
            || self.use_pin != before.use_pin
            || self.color_set != before.color_set
        {
            aspects.push(GroupAspect::Display);
        }
        aspects
    }
}
