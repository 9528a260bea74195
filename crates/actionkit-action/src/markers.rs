//! Pose markers and the active-marker selection.
//!
//! Markers keep creation order. The active marker is remembered by handle, so
//! removing some other marker never changes which marker is active; only its
//! index shifts. Removing the active marker clears the selection.

use actionkit_core::limits::DEFAULT_MARKER_FRAME;
use actionkit_core::MarkerId;
use serde::{Deserialize, Serialize};

/// A named, frame-positioned annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    id: MarkerId,
    /// Display name. Not required to be unique.
    pub name: String,
    /// Frame the marker sits on.
    pub frame: i32,
    /// Marker is selected.
    pub selected: bool,
}

impl Marker {
    /// Create a selected marker on the default frame.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MarkerId::new(),
            name: name.into(),
            frame: DEFAULT_MARKER_FRAME,
            selected: true,
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }
}

/// Markers in creation order plus the active selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerCollection {
    markers: Vec<Marker>,
    active: Option<MarkerId>,
}

impl MarkerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new marker.
    pub fn create(&mut self, name: impl Into<String>) -> MarkerId {
        let marker = Marker::new(name);
        let id = marker.id();
        self.markers.push(marker);
        id
    }

    /// Remove a marker, returning it. Clears the selection if it was active.
    pub fn remove(&mut self, id: MarkerId) -> Option<Marker> {
        let pos = self.position(id)?;
        if self.active == Some(id) {
            self.active = None;
        }
        Some(self.markers.remove(pos))
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id() == id)
    }

    pub fn get_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|m| m.id() == id)
    }

    /// 0-based position in creation order.
    pub fn position(&self, id: MarkerId) -> Option<usize> {
        self.markers.iter().position(|m| m.id() == id)
    }

    // ── Active marker ───────────────────────────────────────────

    pub fn active(&self) -> Option<&Marker> {
        self.get(self.active?)
    }

    /// Make `id` active. A handle that is not in the collection clears the
    /// selection instead.
    pub fn set_active(&mut self, id: MarkerId) {
        self.active = self.position(id).map(|_| id);
    }

    /// Position of the active marker, or 0 when nothing is active.
    pub fn active_index(&self) -> usize {
        self.active
            .and_then(|id| self.position(id))
            .unwrap_or(0)
    }

    /// Select the marker at `index`, clamped into [`Self::active_index_range`].
    /// With no markers the selection is cleared.
    pub fn set_active_index(&mut self, index: i32) {
        if self.markers.is_empty() {
            self.active = None;
            return;
        }
        let (min, max) = self.active_index_range();
        let idx = usize::try_from(index).unwrap_or(0).clamp(min, max);
        self.active = Some(self.markers[idx].id());
    }

    /// Valid index range for UI sliders; `(0, 0)` when empty.
    pub fn active_index_range(&self) -> (usize, usize) {
        (0, self.markers.len().saturating_sub(1))
    }
}
