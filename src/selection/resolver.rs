//! Pick the shape a deletion click refers to
//!
//! When several shapes in a slot cover the clicked cell, the one with the
//! smallest footprint wins. Ties go to the most recently inserted shape, so
//! stacking an identical-size shape on top and clicking removes the new one.

use crate::geometry::shapes::{Aabb, Edge, Point};
use crate::store::bitmask::BitmaskClass;
use crate::store::tile_store::TileStore;

/// Shapes that can be hit by a grid click
pub trait Footprint {
    /// Test whether the click lands on the shape
    fn covers(&self, point: Point) -> bool;

    /// Size used to rank overlapping hits, smaller wins
    fn footprint_area(&self) -> i64;
}

impl Footprint for Aabb {
    fn covers(&self, point: Point) -> bool {
        self.contains(point)
    }

    fn footprint_area(&self) -> i64 {
        self.selection_area()
    }
}

impl Footprint for Edge {
    fn covers(&self, point: Point) -> bool {
        self.contains(point)
    }

    fn footprint_area(&self) -> i64 {
        self.selection_area()
    }
}

/// Index of the smallest shape covering `point`, later shapes winning ties
pub fn resolve<T: Footprint>(shapes: &[T], point: Point) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;

    for (index, shape) in shapes.iter().enumerate() {
        if !shape.covers(point) {
            continue;
        }
        let area = shape.footprint_area();
        // <= so that a later equal-area hit replaces the earlier one
        if best.is_none_or(|(_, smallest)| area <= smallest) {
            best = Some((index, area));
        }
    }

    best.map(|(index, _)| index)
}

/// Resolve a click against the boxes of one tile and class
pub fn resolve_aabb(
    store: &TileStore,
    tile: usize,
    class: BitmaskClass,
    point: Point,
) -> Option<usize> {
    resolve(store.aabbs(tile, class), point)
}

/// Resolve a click against the edges of one tile and class
pub fn resolve_edge(
    store: &TileStore,
    tile: usize,
    class: BitmaskClass,
    point: Point,
) -> Option<usize> {
    resolve(store.edges(tile, class), point)
}
