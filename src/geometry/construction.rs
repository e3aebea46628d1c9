//! Two-pick shape construction
//!
//! Shapes are drawn by picking two grid cells. Boxes use inclusive tile
//! semantics, so a single cell picked twice still yields a one-tile box.
//! Edges are snapped onto the dominant axis of the drag before they are
//! normalized, and a drag that collapses onto the anchor yields no edge.

use crate::geometry::shapes::{Aabb, Edge, Point};

/// Normalize two picks into a box covering both cells
pub const fn box_from_points(p1: Point, p2: Point) -> Aabb {
    Aabb::covering(p1, p2)
}

/// Component-wise minimum and maximum of two picks
///
/// The result is a pair of edge endpoints, not an extent.
pub fn edge_endpoints_from_points(p1: Point, p2: Point) -> (Point, Point) {
    (
        Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
        Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
    )
}

/// Force the second pick onto a line through the anchor
///
/// When the horizontal distance does not exceed the vertical one the result
/// takes the anchor's column, otherwise it takes the anchor's row. Equal
/// distances resolve to the anchor's column.
pub fn snap_second_point(anchor: Point, candidate: Point) -> Point {
    let dx = (i64::from(candidate.x) - i64::from(anchor.x)).abs();
    let dy = (i64::from(candidate.y) - i64::from(anchor.y)).abs();
    if dx <= dy {
        Point::new(anchor.x, candidate.y)
    } else {
        Point::new(candidate.x, anchor.y)
    }
}

/// Build the axis-aligned edge a drag from `anchor` to `candidate` produces
///
/// Returns `None` when the snapped endpoint coincides with the anchor.
pub fn edge_from_picks(anchor: Point, candidate: Point) -> Option<Edge> {
    let snapped = snap_second_point(anchor, candidate);
    let (start, end) = edge_endpoints_from_points(snapped, anchor);
    Edge::between(start, end)
}
