//! Host notification adapter.
//!
//! Hosts observe an Action through two services: a dependency graph that must
//! re-evaluate animated data, and a UI bus that redraws editors. The
//! [`NotifyingAction`] wrapper forwards each entry point to the [`Action`],
//! then drains its change journal into a [`HostNotifier`]. Each call produces
//! at most one dependency tag and one event per distinct UI event.

use actionkit_core::{ChannelId, GroupId, MarkerId, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::action::Action;
use crate::change::{ActionChange, GroupAspect};
use crate::channel::Channel;
use crate::group::Group;
use crate::id_root::IdRoot;
use crate::markers::Marker;

/// Dependency-graph recalculation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recalc {
    /// Animation changed; users re-evaluate, no flush to dependents.
    AnimationNoFlush,
}

/// Which editor data an event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiCategory {
    /// Curve content and channel structure.
    Keyframe,
    /// Channel list display state (flags, ranges).
    AnimChannel,
    /// Pose markers.
    Marker,
}

/// What happened to the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiAction {
    Edited,
    Selected,
}

/// Event posted to the UI bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UiEvent {
    pub category: UiCategory,
    pub action: UiAction,
}

impl UiEvent {
    pub const fn new(category: UiCategory, action: UiAction) -> Self {
        Self { category, action }
    }
}

/// Host services an Action reports to.
pub trait HostNotifier {
    /// Tag the action's users for re-evaluation.
    fn tag_update(&mut self, recalc: Recalc);
    /// Post an event to the UI bus.
    fn notify(&mut self, event: UiEvent);
}

/// Notifier that records every call, for tests and tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNotifier {
    pub updates: Vec<Recalc>,
    pub events: Vec<UiEvent>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.updates.clear();
        self.events.clear();
    }
}

impl HostNotifier for RecordingNotifier {
    fn tag_update(&mut self, recalc: Recalc) {
        self.updates.push(recalc);
    }

    fn notify(&mut self, event: UiEvent) {
        self.events.push(event);
    }
}

/// UI event for a recorded change.
fn ui_event(change: &ActionChange) -> UiEvent {
    match change {
        ActionChange::GroupAdded { .. }
        | ActionChange::GroupRemoved { .. }
        | ActionChange::ChannelAdded { .. }
        | ActionChange::ChannelRemoved { .. }
        | ActionChange::ChannelEdited { .. }
        | ActionChange::ChannelsCleared { .. } => {
            UiEvent::new(UiCategory::Keyframe, UiAction::Edited)
        }
        ActionChange::GroupEdited {
            aspect: GroupAspect::Selection,
            ..
        } => UiEvent::new(UiCategory::AnimChannel, UiAction::Selected),
        ActionChange::GroupEdited { .. }
        | ActionChange::FrameRangeChanged { .. }
        | ActionChange::SettingsChanged => UiEvent::new(UiCategory::AnimChannel, UiAction::Edited),
        ActionChange::MarkerAdded { .. }
        | ActionChange::MarkerRemoved { .. }
        | ActionChange::MarkerEdited { .. } => UiEvent::new(UiCategory::Marker, UiAction::Edited),
        ActionChange::ActiveMarkerChanged { .. } => {
            UiEvent::new(UiCategory::Marker, UiAction::Selected)
        }
    }
}

/// Dependency tag for a recorded change, if it needs one.
///
/// Clearing all channels only redraws the UI, as do group selection and
/// display edits. Every other change to curve content or grouping tags the
/// dependency graph.
fn recalc(change: &ActionChange) -> Option<Recalc> {
    match change {
        ActionChange::ChannelsCleared { .. } => None,
        c if c.affects_evaluation() => Some(Recalc::AnimationNoFlush),
        _ => None,
    }
}

/// An [`Action`] paired with the host services it reports to.
#[derive(Debug)]
pub struct NotifyingAction<N: HostNotifier> {
    action: Action,
    notifier: N,
}

impl<N: HostNotifier> NotifyingAction<N> {
    pub fn new(action: Action, notifier: N) -> Self {
        Self { action, notifier }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_parts(self) -> (Action, N) {
        (self.action, self.notifier)
    }

    /// Translate pending changes into host calls.
    fn flush(&mut self) {
        let changes = self.action.take_changes();
        if changes.is_empty() {
            return;
        }
        trace!(action = self.action.name(), count = changes.len(), "flushing changes");

        if changes.iter().any(|c| recalc(c).is_some()) {
            self.notifier.tag_update(Recalc::AnimationNoFlush);
        }
        let mut sent: SmallVec<[UiEvent; 4]> = SmallVec::new();
        for event in changes.iter().map(ui_event) {
            if !sent.contains(&event) {
                sent.push(event);
                self.notifier.notify(event);
            }
        }
    }

    // ── Groups ──────────────────────────────────────────────────

    pub fn create_group(&mut self, name: &str) -> GroupId {
        let id = self.action.create_group(name);
        self.flush();
        id
    }

    pub fn remove_group(&mut self, group: GroupId) -> Result<()> {
        self.action.remove_group(group)?;
        self.flush();
        Ok(())
    }

    pub fn update_group<R>(&mut self, id: GroupId, f: impl FnOnce(&mut Group) -> R) -> Result<R> {
        let out = self.action.update_group(id, f)?;
        self.flush();
        Ok(out)
    }

    // ── Channels ────────────────────────────────────────────────

    pub fn create_channel(
        &mut self,
        data_path: &str,
        array_index: u32,
        group_name: Option<&str>,
    ) -> Result<ChannelId> {
        let id = self.action.create_channel(data_path, array_index, group_name)?;
        self.flush();
        Ok(id)
    }

    pub fn find_channel(&self, data_path: &str, array_index: u32) -> Result<Option<&Channel>> {
        self.action.find_channel(data_path, array_index)
    }

    pub fn remove_channel(&mut self, channel: ChannelId) -> Result<()> {
        self.action.remove_channel(channel)?;
        self.flush();
        Ok(())
    }

    pub fn clear_channels(&mut self) {
        self.action.clear_channels();
        self.flush();
    }

    pub fn update_channel<R>(
        &mut self,
        id: ChannelId,
        f: impl FnOnce(&mut Channel) -> R,
    ) -> Result<R> {
        let out = self.action.update_channel(id, f)?;
        self.flush();
        Ok(out)
    }

    // ── Markers ─────────────────────────────────────────────────

    pub fn create_marker(&mut self, name: &str) -> MarkerId {
        let id = self.action.create_marker(name);
        self.flush();
        id
    }

    pub fn remove_marker(&mut self, marker: MarkerId) -> Result<()> {
        self.action.remove_marker(marker)?;
        self.flush();
        Ok(())
    }

    pub fn update_marker<R>(&mut self, id: MarkerId, f: impl FnOnce(&mut Marker) -> R) -> Result<R> {
        let out = self.action.update_marker(id, f)?;
        self.flush();
        Ok(out)
    }

    pub fn active_marker(&self) -> Option<&Marker> {
        self.action.active_marker()
    }

    pub fn set_active_marker(&mut self, marker: MarkerId) {
        self.action.set_active_marker(marker);
        self.flush();
    }

    pub fn active_marker_index(&self) -> usize {
        self.action.active_marker_index()
    }

    pub fn set_active_marker_index(&mut self, index: i32) {
        self.action.set_active_marker_index(index);
        self.flush();
    }

    // ── Frame range ─────────────────────────────────────────────

    pub fn effective_range(&self) -> (f32, f32) {
        self.action.effective_range()
    }

    pub fn set_effective_range(&mut self, start: f32, end: f32) -> Result<()> {
        self.action.set_effective_range(start, end)?;
        self.flush();
        Ok(())
    }

    pub fn set_start(&mut self, start: f32) -> Result<()> {
        self.action.set_start(start)?;
        self.flush();
        Ok(())
    }

    pub fn set_end(&mut self, end: f32) -> Result<()> {
        self.action.set_end(end)?;
        self.flush();
        Ok(())
    }

    pub fn enable_explicit_range(&mut self, on: bool) {
        self.action.enable_explicit_range(on);
        self.flush();
    }

    pub fn set_cyclic(&mut self, cyclic: bool) {
        self.action.set_cyclic(cyclic);
        self.flush();
    }

    pub fn scan_curve_extent(&self, include_modifiers: bool) -> (f32, f32) {
        self.action.scan_curve_extent(include_modifiers)
    }

    // ── Settings ────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.action.set_name(name);
        self.flush();
    }

    pub fn set_id_root(&mut self, root: Option<IdRoot>) {
        self.action.set_id_root(root);
        self.flush();
    }
}
