//! Query status codes shared between the collision loop and the worker.

use serde::{Deserialize, Serialize};

/// Outcome of a single collision query.
///
/// Serialized on the wire as a small integer so the worker response stays a
/// flat numeric payload: `1` collision, `0` no collision, `-1` out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryStatus {
    /// The deepest sample penetrates the static body; deltas are valid.
    Collision,
    /// Every in-bounds sample sits at or above the contact threshold.
    NoCollision,
    /// No sample point landed inside the grid's bounding box at all.
    OutOfBounds,
}

impl QueryStatus {
    /// Wire encoding used by the worker response payload.
    pub fn code(self) -> i32 {
        match self {
            QueryStatus::Collision => 1,
            QueryStatus::NoCollision => 0,
            QueryStatus::OutOfBounds => -1,
        }
    }

    /// Decodes a wire status code. Unknown codes are `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(QueryStatus::Collision),
            0 => Some(QueryStatus::NoCollision),
            -1 => Some(QueryStatus::OutOfBounds),
            _ => None,
        }
    }
}
