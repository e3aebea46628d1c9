//! Tile by bitmask-class index of editable shapes
//!
//! Tiles are dense from ID 0 and every tile has one slot per bitmask class.
//! The index is a two-dimensional array with one row per tile; growing past
//! the last tile reallocates the array with empty rows appended, leaving
//! existing slots untouched. Growth stops at [`MAX_TILE_COUNT`] tiles.

use ndarray::Array2;

use crate::geometry::shapes::{Aabb, Edge, Point};
use crate::io::configuration::{BITMASK_CLASS_COUNT, MAX_TILE_COUNT};
use crate::store::bitmask::BitmaskClass;
use crate::store::shape_set::ShapeSet;

/// Shapes attached to one tile under one bitmask class
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassSlot {
    /// Collision boxes
    pub aabbs: ShapeSet<Aabb>,
    /// Light and vertex anchors
    pub points: ShapeSet<Point>,
    /// Occlusion edges
    pub edges: ShapeSet<Edge>,
}

/// Shape counts summed over a whole store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeTotals {
    /// Stored boxes
    pub aabbs: usize,
    /// Stored points
    pub points: usize,
    /// Stored edges
    pub edges: usize,
}

/// Dense store of class slots for tile IDs `0..tile_count`
///
/// Always holds at least one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileStore {
    slots: Array2<ClassSlot>,
}

impl Default for TileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TileStore {
    /// Create a store holding one empty tile
    pub fn new() -> Self {
        Self::with_tiles(1)
    }

    /// Create a store with `tiles` empty tiles, clamped to `1..=MAX_TILE_COUNT`
    pub fn with_tiles(tiles: usize) -> Self {
        Self {
            slots: Array2::default((tiles.clamp(1, MAX_TILE_COUNT), BITMASK_CLASS_COUNT)),
        }
    }

    /// Build a store from slots laid out tile-major, class ascending
    ///
    /// Returns `None` when the slot count is not a whole number of tiles or
    /// exceeds [`MAX_TILE_COUNT`] tiles. An empty list yields a single empty
    /// tile.
    pub fn from_slots(slots: Vec<ClassSlot>) -> Option<Self> {
        if slots.is_empty() {
            return Some(Self::new());
        }
        let tiles = slots.len() / BITMASK_CLASS_COUNT;
        if tiles > MAX_TILE_COUNT {
            return None;
        }
        Array2::from_shape_vec((tiles, BITMASK_CLASS_COUNT), slots)
            .ok()
            .map(|slots| Self { slots })
    }

    /// Number of tiles, always at least one
    pub fn tile_count(&self) -> usize {
        self.slots.nrows()
    }

    /// Grow the store so that `tile` is a valid ID
    ///
    /// Never shrinks. Returns the number of tiles appended, or `None` when
    /// `tile` is at or past [`MAX_TILE_COUNT`], leaving the store unchanged.
    pub fn ensure_tile(&mut self, tile: usize) -> Option<usize> {
        let current = self.tile_count();
        if tile < current {
            return Some(0);
        }
        let count = tile.checked_add(1).filter(|&count| count <= MAX_TILE_COUNT)?;

        let grown = Array2::from_shape_fn((count, BITMASK_CLASS_COUNT), |(row, col)| {
            self.slots.get([row, col]).cloned().unwrap_or_default()
        });
        self.slots = grown;
        Some(count - current)
    }

    /// Slot for a tile and class, `None` for an unknown tile
    pub fn slot(&self, tile: usize, class: BitmaskClass) -> Option<&ClassSlot> {
        self.slots.get([tile, class.index()])
    }

    fn slot_mut(&mut self, tile: usize, class: BitmaskClass) -> Option<&mut ClassSlot> {
        self.slots.get_mut([tile, class.index()])
    }

    /// Boxes stored for a tile and class
    pub fn aabbs(&self, tile: usize, class: BitmaskClass) -> &[Aabb] {
        self.slot(tile, class)
            .map(|slot| slot.aabbs.as_slice())
            .unwrap_or_default()
    }

    /// Points stored for a tile and class
    pub fn points(&self, tile: usize, class: BitmaskClass) -> &[Point] {
        self.slot(tile, class)
            .map(|slot| slot.points.as_slice())
            .unwrap_or_default()
    }

    /// Edges stored for a tile and class
    pub fn edges(&self, tile: usize, class: BitmaskClass) -> &[Edge] {
        self.slot(tile, class)
            .map(|slot| slot.edges.as_slice())
            .unwrap_or_default()
    }

    /// Add a box unless an equal one is stored; returns whether it was added
    pub fn insert_aabb(&mut self, tile: usize, class: BitmaskClass, aabb: Aabb) -> bool {
        self.slot_mut(tile, class)
            .is_some_and(|slot| slot.aabbs.insert(aabb))
    }

    /// Add a point unless an equal one is stored; returns whether it was added
    pub fn insert_point(&mut self, tile: usize, class: BitmaskClass, point: Point) -> bool {
        self.slot_mut(tile, class)
            .is_some_and(|slot| slot.points.insert(point))
    }

    /// Add an edge unless an equal one is stored; returns whether it was added
    pub fn insert_edge(&mut self, tile: usize, class: BitmaskClass, edge: Edge) -> bool {
        self.slot_mut(tile, class)
            .is_some_and(|slot| slot.edges.insert(edge))
    }

    /// Remove the box at a position; out of range is a no-op
    pub fn remove_aabb(&mut self, tile: usize, class: BitmaskClass, index: usize) -> Option<Aabb> {
        self.slot_mut(tile, class)
            .and_then(|slot| slot.aabbs.remove(index))
    }

    /// Remove the point at a position; out of range is a no-op
    pub fn remove_point(
        &mut self,
        tile: usize,
        class: BitmaskClass,
        index: usize,
    ) -> Option<Point> {
        self.slot_mut(tile, class)
            .and_then(|slot| slot.points.remove(index))
    }

    /// Remove the edge at a position; out of range is a no-op
    pub fn remove_edge(&mut self, tile: usize, class: BitmaskClass, index: usize) -> Option<Edge> {
        self.slot_mut(tile, class)
            .and_then(|slot| slot.edges.remove(index))
    }

    /// Remove the first point equal to `point`; returns whether one was found
    pub fn remove_point_at(&mut self, tile: usize, class: BitmaskClass, point: Point) -> bool {
        self.slot_mut(tile, class)
            .is_some_and(|slot| slot.points.remove_value(&point))
    }

    /// Slots of one tile in class order
    pub fn tile_slots(&self, tile: usize) -> impl Iterator<Item = &ClassSlot> + '_ {
        BitmaskClass::all().filter_map(move |class| self.slot(tile, class))
    }

    /// Count every stored shape by kind
    pub fn totals(&self) -> ShapeTotals {
        self.slots
            .iter()
            .fold(ShapeTotals::default(), |totals, slot| ShapeTotals {
                aabbs: totals.aabbs + slot.aabbs.len(),
                points: totals.points + slot.points.len(),
                edges: totals.edges + slot.edges.len(),
            })
    }
}
