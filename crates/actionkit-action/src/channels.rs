//! Ordered channel list and the group registry that partitions it.
//!
//! Layout invariant: the list holds one contiguous run per group, runs appear
//! in registry order, and ungrouped channels form the tail. Hosts walk "the
//! rest of this group" by adjacency, so every insert and relocation goes
//! through [`ChannelList::move_run`].

use std::ops::Range;

use actionkit_core::{ActionError, ChannelId, GroupId};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::group::Group;

/// Channels of an Action plus the groups that claim runs of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelList {
    channels: Vec<Channel>,
    groups: Vec<Group>,
}

impl ChannelList {
    /// Create an empty list with no groups.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ─────────────────────────────────────────────────

    /// All channels in list order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// All groups in registry order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Position of a channel in list order.
    pub fn position(&self, id: ChannelId) -> Option<usize> {
        self.channels.iter().position(|c| c.id() == id)
    }

    pub fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id() == id)
    }

    pub fn channel_mut(&mut self, id: ChannelId) -> Option<&mut Channel> {
        self.channels.iter_mut().find(|c| c.id() == id)
    }

    /// First channel animating `data_path[array_index]` (linear scan).
    pub fn find(&self, data_path: &str, array_index: u32) -> Option<&Channel> {
        self.channels
            .iter()
            .find(|c| c.matches(data_path, array_index))
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id() == id)
    }

    /// First group in registry order with the given name.
    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn has_group(&self, id: GroupId) -> bool {
        self.groups.iter().any(|g| g.id() == id)
    }

    /// Channels of a group, walking forward from its first channel while the
    /// neighbour still belongs to the same group.
    pub fn group_channels(&self, id: GroupId) -> impl Iterator<Item = &Channel> + '_ {
        let start = self
            .channels
            .iter()
            .position(|c| c.group() == Some(id))
            .unwrap_or(self.channels.len());
        self.channels[start..]
            .iter()
            .take_while(move |c| c.group() == Some(id))
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Register a new, empty group at the end of the registry.
    pub fn add_group(&mut self, name: impl Into<String>) -> GroupId {
        let group = Group::new(name);
        let id = group.id();
        self.groups.push(group);
        id
    }

    /// Insert a channel at the end of `group`'s run, or at the ungrouped tail.
    ///
    /// Returns `None` (and inserts nothing) if `group` is not registered.
    pub fn insert(&mut self, mut channel: Channel, group: Option<GroupId>) -> Option<ChannelId> {
        let id = channel.id();
        match group {
            Some(gid) => {
                if !self.has_group(gid) {
                    return None;
                }
                let at = self.group_run(gid).end;
                channel.group = Some(gid);
                self.channels.push(channel);
                let last = self.channels.len() - 1;
                self.move_run(last..last + 1, at);
            }
            None => {
                channel.group = None;
                self.channels.push(channel);
            }
        }
        Some(id)
    }

    /// Remove a channel from the list, returning it.
    pub fn remove(&mut self, id: ChannelId) -> Option<Channel> {
        let pos = self.position(id)?;
        Some(self.channels.remove(pos))
    }

    /// Unregister a group. Its channels lose their back-reference and move to
    /// the tail of the list in their existing order.
    ///
    /// Returns the removed group and the number of relocated channels.
    pub fn remove_group(&mut self, id: GroupId) -> Option<(Group, usize)> {
        let gpos = self.groups.iter().position(|g| g.id() == id)?;
        let run = self.group_run(id);
        let count = run.len();
        let to = self.channels.len() - count;
        self.move_run(run, to);
        for channel in &mut self.channels[to..] {
            channel.group = None;
        }
        Some((self.groups.remove(gpos), count))
    }

    /// Drop every channel. Groups stay registered, now empty.
    pub fn clear(&mut self) -> usize {
        let count = self.channels.len();
        self.channels.clear();
        count
    }

    // ── Layout ──────────────────────────────────────────────────

    /// Index range occupied by a group's run.
    ///
    /// An empty group gets an empty range at the place its run would start:
    /// right after the nearest preceding group that has channels, or the head.
    fn group_run(&self, id: GroupId) -> Range<usize> {
        if let Some(start) = self.channels.iter().position(|c| c.group() == Some(id)) {
            let len = self.channels[start..]
                .iter()
                .take_while(|c| c.group() == Some(id))
                .count();
            return start..start + len;
        }
        let rank = self
            .groups
            .iter()
            .position(|g| g.id() == id)
            .unwrap_or(self.groups.len());
        let at = self.groups[..rank]
            .iter()
            .rev()
            .find_map(|g| {
                self.channels
                    .iter()
                    .rposition(|c| c.group() == Some(g.id()))
            })
            .map_or(0, |last| last + 1);
        at..at
    }

    /// Move the channels in `run` so the first of them lands at index `to`
    /// of the resulting list. Relative order inside the run is preserved.
    fn move_run(&mut self, run: Range<usize>, to: usize) {
        let n = run.len();
        debug_assert!(run.end <= self.channels.len());
        debug_assert!(to + n <= self.channels.len());
        if n == 0 || to == run.start {
            return;
        }
        if to < run.start {
            self.channels[to..run.end].rotate_right(n);
        } else {
            self.channels[run.start..to + n].rotate_left(n);
        }
    }

    /// Check the layout invariant.
    ///
    /// Every back-reference must name a registered group, and walking the
    /// list must visit group runs in registry order before the ungrouped tail.
    pub fn validate(&self) -> actionkit_core::Result<()> {
        let mut last_rank = 0usize;
        for (i, channel) in self.channels.iter().enumerate() {
            let rank = match channel.group() {
                Some(gid) => self
                    .groups
                    .iter()
                    .position(|g| g.id() == gid)
                    .ok_or_else(|| {
                        ActionError::InvalidLayout(format!(
                            "channel '{}[{}]' at {} references an unregistered group",
                            channel.data_path(),
                            channel.array_index(),
                            i
                        ))
                    })?,
                None => self.groups.len(),
            };
            if rank < last_rank {
                return Err(ActionError::InvalidLayout(format!(
                    "channel '{}[{}]' at {} breaks group contiguity",
                    channel.data_path(),
                    channel.array_index(),
                    i
                )));
            }
            last_rank = rank;
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────
