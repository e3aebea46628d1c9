//! Edit modes and the outcome values session operations report

use std::fmt;

use crate::geometry::shapes::Shape;
use crate::io::error::FormatError;

/// Which shape kind clicks create and delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    /// Two-click collision boxes
    #[default]
    Aabb,
    /// Single-click points
    Point,
    /// Two-click axis-aligned edges
    Edge,
}

impl EditMode {
    /// Mode that follows this one in the cycle
    pub const fn next(self) -> Self {
        match self {
            Self::Aabb => Self::Point,
            Self::Point => Self::Edge,
            Self::Edge => Self::Aabb,
        }
    }

    /// Label shown in status output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aabb => "AABBs",
            Self::Point => "Points",
            Self::Edge => "Edges",
        }
    }

    /// Whether shapes in this mode are built from two picks
    pub const fn is_two_pick(self) -> bool {
        matches!(self, Self::Aabb | Self::Edge)
    }

    /// Parse a mode name as typed on the console
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "aabb" | "aabbs" | "box" | "boxes" => Some(Self::Aabb),
            "point" | "points" => Some(Self::Point),
            "edge" | "edges" => Some(Self::Edge),
            _ => None,
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a left-click style edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// First pick stored, waiting for the second
    AnchorSet,
    /// Shape added to the current slot
    Inserted(Shape),
    /// An equal shape was already stored
    AlreadyPresent(Shape),
    /// Edge would have zero length; the first pick stays pending
    Degenerate,
    /// No first pick to complete
    NoAnchor,
}

/// Result of a right-click style edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Shape removed from the current slot
    Removed(Shape),
    /// Pending first pick discarded, nothing removed
    Cancelled,
    /// Nothing under the click
    Missed,
}

/// How a session obtained its model
#[derive(Debug)]
pub enum LoadStatus {
    /// File decoded successfully
    Loaded,
    /// File was unusable; the session holds an empty default model
    UsingDefaults(FormatError),
}

impl LoadStatus {
    /// Whether the file decoded successfully
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}
