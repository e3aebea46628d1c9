//! Whole-file model: resolution plus tile shape data

use std::fmt;

use crate::io::configuration::DEFAULT_RESOLUTION;
use crate::store::tile_store::TileStore;

/// Declared grid size of the tileset, in tiles
///
/// Purely descriptive; shape coordinates are not clipped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// Create a resolution, rejecting zero dimensions
    pub const fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// Width in tiles
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in tiles
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Grow or shrink each dimension, never going below one tile
    #[must_use]
    pub const fn resized(self, delta_width: i32, delta_height: i32) -> Self {
        Self {
            width: clamp_dimension(self.width.saturating_add_signed(delta_width)),
            height: clamp_dimension(self.height.saturating_add_signed(delta_height)),
        }
    }
}

const fn clamp_dimension(value: u32) -> u32 {
    if value == 0 { 1 } else { value }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: DEFAULT_RESOLUTION.0,
            height: DEFAULT_RESOLUTION.1,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything a pointybox file stores
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pointybox {
    /// Declared tileset grid size
    pub resolution: Resolution,
    /// Shapes per tile and bitmask class
    pub tiles: TileStore,
}

impl Pointybox {
    /// Bundle a resolution with tile data
    pub const fn new(resolution: Resolution, tiles: TileStore) -> Self {
        Self { resolution, tiles }
    }
}
