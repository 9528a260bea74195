//! Stable handles for entities owned by an Action.
//!
//! Handles wrap a random UUID. Once the entity they name is removed the handle
//! never resolves again, so a stale handle is reported as "not found" instead
//! of silently aliasing a newer entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Allocate a fresh handle.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The underlying UUID.
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

handle!(
    /// Handle to a curve channel (F-Curve).
    ChannelId
);

handle!(
    /// Handle to a channel group.
    GroupId
);

handle!(
    /// Handle to a pose marker.
    MarkerId
);
