//! The Action aggregate: channels, groups, markers and playback range.
//!
//! Every successful mutation records what it changed (see [`ActionChange`]).
//! Failed calls return an error before touching any state, so neither the
//! Action nor its change journal ever holds a partial update.
//!
//! The journal grows until [`Action::take_changes`] drains it. A repeated edit
//! of the same entity folds into the previous entry, but hosts that drive an
//! `Action` directly must still drain it after each batch of calls;
//! [`NotifyingAction`](crate::NotifyingAction) does so after every call.

use actionkit_core::{ActionError, ChannelId, GroupId, MarkerId, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::change::{ActionChange, ChangeSet};
use crate::channel::Channel;
use crate::channels::ChannelList;
use crate::group::Group;
use crate::id_root::{ActionEditorMode, IdRoot};
use crate::markers::{Marker, MarkerCollection};
use crate::range::{scan_curve_extent, FrameRange};

/// A collection of F-Curves, their groups, pose markers and range metadata
/// for one animatable entity.
///
/// Cloning copies the data but not the pending changes.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Action {
    name: String,
    channels: ChannelList,
    markers: MarkerCollection,
    range: FrameRange,
    id_root: Option<IdRoot>,
    #[serde(skip)]
    changes: ChangeSet,
}

impl Clone for Action {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            channels: self.channels.clone(),
            markers: self.markers.clone(),
            range: self.range,
            id_root: self.id_root,
            changes: ChangeSet::new(),
        }
    }
}

impl Action {
    /// Create a new empty action.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.record(ActionChange::SettingsChanged);
    }

    /// Drain the changes recorded since the last call.
    pub fn take_changes(&mut self) -> ChangeSet {
        std::mem::take(&mut self.changes)
    }

    /// Whether there are changes nobody has taken yet.
    pub fn has_pending_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Number of changes waiting in the journal.
    pub fn pending_changes(&self) -> usize {
        self.changes.len()
    }

    fn record(&mut self, change: ActionChange) {
        if let Some(last) = self.changes.last_mut() {
            if last.coalesce(&change) {
                return;
            }
        }
        self.changes.push(change);
    }

    // ── Groups ──────────────────────────────────────────────────

    /// Create a new empty group at the end of the registry.
    pub fn create_group(&mut self, name: &str) -> GroupId {
        let group = self.channels.add_group(name);
        debug!(action = %self.name, group = name, "group added");
        self.record(ActionChange::GroupAdded { group });
        group
    }

    /// Remove a group. Its channels become ungrouped and move to the tail of
    /// the channel list in their existing order.
    pub fn remove_group(&mut self, group: GroupId) -> Result<()> {
        let Some((removed, relocated)) = self.channels.remove_group(group) else {
            warn!(action = %self.name, %group, "remove of unknown group");
            return Err(ActionError::NotFound(format!(
                "Action group {} not found in action '{}'",
                group, self.name
            )));
        };
        debug!(action = %self.name, group = %removed.name, relocated, "group removed");
        self.record(ActionChange::GroupRemoved { group, relocated });
        Ok(())
    }

    pub fn groups(&self) -> &[Group] {
        self.channels.groups()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.channels.group(id)
    }

    /// First group with the given name.
    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.channels.find_group(name)
    }

    /// Channels belonging to a group, in list order.
    pub fn group_channels(&self, group: GroupId) -> impl Iterator<Item = &Channel> + '_ {
        self.channels.group_channels(group)
    }

    /// Edit a group's name, flags or colors.
    ///
    /// Records one [`ActionChange::GroupEdited`] per
    /// [`GroupAspect`](crate::change::GroupAspect) the
    /// closure changed; an edit that changes nothing records nothing.
    pub fn update_group<R>(&mut self, id: GroupId, f: impl FnOnce(&mut Group) -> R) -> Result<R> {
        let Some(group) = self.channels.group_mut(id) else {
            return Err(ActionError::NotFound(format!(
                "Action group {} not found in action '{}'",
                id, self.name
            )));
        };
        let before = group.clone();
        let out = f(group);
        let aspects = group.edited_aspects(&before);
        for aspect in aspects {
            self.record(ActionChange::GroupEdited { group: id, aspect });
        }
        Ok(out)
    }

    // ── Channels ────────────────────────────────────────────────

    /// Add a channel for `data_path[array_index]`.
    ///
    /// With a group name the channel joins the end of that group's run; the
    /// group is created first if no group has that name. An empty group name
    /// counts as none. Fails if the data path is empty or the channel exists.
    pub fn create_channel(
        &mut self,
        data_path: &str,
        array_index: u32,
        group_name: Option<&str>,
    ) -> Result<ChannelId> {
        if data_path.is_empty() {
            warn!(action = %self.name, "channel with empty data path rejected");
            return Err(ActionError::InvalidArgument(
                "F-Curve data path empty, invalid argument".into(),
            ));
        }
        if self.channels.find(data_path, array_index).is_some() {
            warn!(action = %self.name, data_path, array_index, "duplicate channel rejected");
            return Err(ActionError::DuplicateChannel {
                data_path: data_path.to_string(),
                array_index,
                action: self.name.clone(),
            });
        }

        let group = match group_name.filter(|name| !name.is_empty()) {
            Some(name) => {
                let existing = self.channels.find_group(name).map(|g| g.id());
                Some(existing.unwrap_or_else(|| self.create_group(name)))
            }
            None => None,
        };

        let channel = Channel::new(data_path, array_index);
        let Some(id) = self.channels.insert(channel, group) else {
            warn!(action = %self.name, data_path, array_index, "channel group vanished before insert");
            return Err(ActionError::NotFound(format!(
                "F-Curve's action group not found in action '{}'",
                self.name
            )));
        };
        debug!(action = %self.name, data_path, array_index, "channel added");
        self.record(ActionChange::ChannelAdded { channel: id, group });
        Ok(id)
    }

    /// Find the channel for `data_path[array_index]` by linear scan.
    ///
    /// An empty data path is an error; a missing channel is `Ok(None)`.
    pub fn find_channel(&self, data_path: &str, array_index: u32) -> Result<Option<&Channel>> {
        if data_path.is_empty() {
            return Err(ActionError::InvalidArgument(
                "F-Curve data path empty, invalid argument".into(),
            ));
        }
        Ok(self.channels.find(data_path, array_index))
    }

    /// Remove a channel, keeping its group's run contiguous.
    pub fn remove_channel(&mut self, id: ChannelId) -> Result<()> {
        let Some(channel) = self.channels.channel(id) else {
            warn!(action = %self.name, channel = %id, "remove of unknown channel");
            return Err(ActionError::NotFound(format!(
                "F-Curve not found in action '{}'",
                self.name
            )));
        };
        if let Some(group) = channel.group() {
            if !self.channels.has_group(group) {
                warn!(action = %self.name, %group, "channel references unknown group");
                return Err(ActionError::NotFound(format!(
                    "F-Curve's action group {} not found in action '{}'",
                    group, self.name
                )));
            }
        }

        if let Some(removed) = self.channels.remove(id) {
            debug!(
                action = %self.name,
                data_path = removed.data_path(),
                array_index = removed.array_index(),
                "channel removed"
            );
            self.record(ActionChange::ChannelRemoved { channel: id });
        }
        Ok(())
    }

    /// Remove every channel. Groups stay registered but empty.
    pub fn clear_channels(&mut self) {
        let count = self.channels.clear();
        debug!(action = %self.name, count, "channels cleared");
        self.record(ActionChange::ChannelsCleared { count });
    }

    pub fn channels(&self) -> &[Channel] {
        self.channels.channels()
    }

    pub fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.channel(id)
    }

    /// Edit a channel's keys, modifiers or flags.
    pub fn update_channel<R>(
        &mut self,
        id: ChannelId,
        f: impl FnOnce(&mut Channel) -> R,
    ) -> Result<R> {
        let Some(channel) = self.channels.channel_mut(id) else {
            return Err(ActionError::NotFound(format!(
                "F-Curve not found in action '{}'",
                self.name
            )));
        };
        let out = f(channel);
        self.record(ActionChange::ChannelEdited { channel: id });
        Ok(out)
    }

    /// Check the channel layout invariant. See [`ChannelList::validate`].
    pub fn validate(&self) -> Result<()> {
        self.channels.validate()
    }

    // ── Markers ─────────────────────────────────────────────────

    /// Add a selected marker on frame 1.
    pub fn create_marker(&mut self, name: &str) -> MarkerId {
        let marker = self.markers.create(name);
        debug!(action = %self.name, marker = name, "marker added");
        self.record(ActionChange::MarkerAdded { marker });
        marker
    }

    pub fn remove_marker(&mut self, id: MarkerId) -> Result<()> {
        let was_active = self.markers.active().map(|m| m.id()) == Some(id);
        let Some(removed) = self.markers.remove(id) else {
            warn!(action = %self.name, marker = %id, "remove of unknown marker");
            return Err(ActionError::NotFound(format!(
                "Timeline marker {} not found in action '{}'",
                id, self.name
            )));
        };
        debug!(action = %self.name, marker = %removed.name, "marker removed");
        self.record(ActionChange::MarkerRemoved { marker: id });
        if was_active {
            self.changes
                .push(ActionChange::ActiveMarkerChanged { marker: None });
        }
        Ok(())
    }

    pub fn markers(&self) -> &[Marker] {
        self.markers.markers()
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id)
    }

    /// Rename, move or (de)select a marker.
    pub fn update_marker<R>(&mut self, id: MarkerId, f: impl FnOnce(&mut Marker) -> R) -> Result<R> {
        let Some(marker) = self.markers.get_mut(id) else {
            return Err(ActionError::NotFound(format!(
                "Timeline marker {} not found in action '{}'",
                id, self.name
            )));
        };
        let out = f(marker);
        self.record(ActionChange::MarkerEdited { marker: id });
        Ok(out)
    }

    pub fn active_marker(&self) -> Option<&Marker> {
        self.markers.active()
    }

    /// Make `id` the active marker. A handle that is not one of this action's
    /// markers clears the selection; this is not an error.
    pub fn set_active_marker(&mut self, id: MarkerId) {
        self.markers.set_active(id);
        self.push_active_marker();
    }

    /// Index of the active marker in creation order, 0 when none is active.
    pub fn active_marker_index(&self) -> usize {
        self.markers.active_index()
    }

    /// Select the marker at `index`, clamped into the valid range.
    pub fn set_active_marker_index(&mut self, index: i32) {
        self.markers.set_active_index(index);
        self.push_active_marker();
    }

    /// Valid range for [`Self::set_active_marker_index`]; `(0, 0)` when empty.
    pub fn active_marker_index_range(&self) -> (usize, usize) {
        self.markers.active_index_range()
    }

    fn push_active_marker(&mut self) {
        let marker = self.markers.active().map(|m| m.id());
        self.record(ActionChange::ActiveMarkerChanged { marker });
    }

    // ── Frame range ─────────────────────────────────────────────

    /// Union of all channels' key extents, optionally widened by modifiers.
    pub fn scan_curve_extent(&self, include_modifiers: bool) -> (f32, f32) {
        scan_curve_extent(self.channels.channels(), include_modifiers)
    }

    /// Combined key range of all channels, ignoring the manual override.
    pub fn curve_frame_range(&self) -> (f32, f32) {
        self.scan_curve_extent(false)
    }

    /// Manual range if enabled, otherwise the combined key range.
    pub fn effective_range(&self) -> (f32, f32) {
        self.range.effective(|| self.curve_frame_range())
    }

    /// Stored manual range, used or not.
    pub fn manual_range(&self) -> (f32, f32) {
        self.range.stored()
    }

    pub fn uses_explicit_range(&self) -> bool {
        self.range.is_explicit()
    }

    /// Set and enable the manual range. `end` is raised to `start` if needed.
    /// Non-finite frames are an `InvalidArgument`.
    pub fn set_effective_range(&mut self, start: f32, end: f32) -> Result<()> {
        if let Err(err) = self.range.set(start, end) {
            warn!(action = %self.name, %err, "frame range rejected");
            return Err(err);
        }
        self.push_range();
        Ok(())
    }

    pub fn set_start(&mut self, start: f32) -> Result<()> {
        if let Err(err) = self.range.set_start(start) {
            warn!(action = %self.name, %err, "frame range rejected");
            return Err(err);
        }
        self.push_range();
        Ok(())
    }

    pub fn set_end(&mut self, end: f32) -> Result<()> {
        if let Err(err) = self.range.set_end(end) {
            warn!(action = %self.name, %err, "frame range rejected");
            return Err(err);
        }
        self.push_range();
        Ok(())
    }


    /// Toggle the manual range. Enabling a blank `(0, 0)` range seeds it from
    /// the channels' key range.
    pub fn enable_explicit_range(&mut self, on: bool) {
        let scanned = scan_curve_extent(self.channels.channels(), false);
        self.range.enable(on, || scanned);
        self.push_range();
    }

    pub fn is_cyclic(&self) -> bool {
        self.range.is_cyclic()
    }

    pub fn set_cyclic(&mut self, cyclic: bool) {
        self.range.set_cyclic(cyclic);
        self.push_range();
    }

    fn push_range(&mut self) {
        let (start, end) = self.range.stored();
        debug!(action = %self.name, start, end, explicit = self.range.is_explicit(), "frame range changed");
        self.record(ActionChange::FrameRangeChanged {
            start,
            end,
            explicit: self.range.is_explicit(),
        });
    }

    // ── ID root ─────────────────────────────────────────────────

    pub fn id_root(&self) -> Option<IdRoot> {
        self.id_root
    }

    pub fn set_id_root(&mut self, root: Option<IdRoot>) {
        self.id_root = root;
        self.record(ActionChange::SettingsChanged);
    }

    /// Whether this action may be assigned to a data-block of kind `target`.
    pub fn is_assignable_to(&self, target: IdRoot) -> bool {
        match self.id_root {
            None => true,
            Some(root) => root == target,
        }
    }

    /// Whether this action may be picked in an action editor showing `mode`.
    ///
    /// Actions without an ID root are accepted everywhere. Otherwise the mode
    /// must edit exactly the action's kind of data-block.
    pub fn is_assignable_in_editor(&self, mode: ActionEditorMode) -> bool {
        match self.id_root {
            None => true,
            Some(root) => mode.edited_root() == Some(root),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────
