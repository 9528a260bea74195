//! Kind of data-block an action is meant to animate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data-block type an action animates.
///
/// Actions without an ID root can be assigned to any data-block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdRoot {
    Object,
    ShapeKey,
    Material,
    World,
    Scene,
    Camera,
    Light,
    Mesh,
    Armature,
    NodeTree,
}

impl IdRoot {
    pub fn name(self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::ShapeKey => "Shape Key",
            Self::Material => "Material",
            Self::World => "World",
            Self::Scene => "Scene",
            Self::Camera => "Camera",
            Self::Light => "Light",
            Self::Mesh => "Mesh",
            Self::Armature => "Armature",
            Self::NodeTree => "Node Tree",
        }
    }
}

impl fmt::Display for IdRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display mode of the editor an action is being assigned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionEditorMode {
    DopeSheet,
    /// Object-level action editing.
    Action,
    ShapeKey,
    GreasePencil,
    Mask,
    CacheFile,
}

impl ActionEditorMode {
    /// The only data-block kind this mode edits actions for, if any.
    pub fn edited_root(self) -> Option<IdRoot> {
        match self {
            Self::Action => Some(IdRoot::Object),
            Self::ShapeKey => Some(IdRoot::ShapeKey),
            _ => None,
        }
    }
}
