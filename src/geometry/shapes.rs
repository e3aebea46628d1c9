//! Grid-space value types stored in a pointybox file
//!
//! Boxes and edges share a four-integer layout on disk but mean different
//! things: an [`Aabb`] is a corner plus extents, an [`Edge`] is two endpoints.
//! They are kept as separate types so containment logic cannot be mixed up.

use std::fmt;

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column in grid units
    pub x: i32,
    /// Row in grid units
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding box stored as top-left corner plus extents
///
/// Extents are never negative. Boxes built from picks always cover at least
/// one tile, but zero extents are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Aabb {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl Aabb {
    /// Create a box, rejecting negative extents
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Option<Self> {
        if width < 0 || height < 0 {
            return None;
        }
        Some(Self {
            left,
            top,
            width,
            height,
        })
    }

    /// Smallest box whose cells include both corners
    ///
    /// Each extent counts the far cell, so a single cell gives a 1x1 box.
    /// Extents saturate at `i32::MAX`.
    pub const fn covering(a: Point, b: Point) -> Self {
        let (left, right) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        let (top, bottom) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
        Self {
            left,
            top,
            width: right.saturating_sub(left).saturating_add(1),
            height: bottom.saturating_sub(top).saturating_add(1),
        }
    }

    /// Leftmost column
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// Topmost row
    pub const fn top(&self) -> i32 {
        self.top
    }

    /// Horizontal extent
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Vertical extent
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Raw fields in storage order `[left, top, width, height]`
    pub const fn to_raw(&self) -> [i32; 4] {
        [self.left, self.top, self.width, self.height]
    }

    /// Test whether a grid point lies on or inside the box
    ///
    /// Both the far column `left + width` and the far row `top + height`
    /// count as inside.
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        let left = i64::from(self.left);
        let top = i64::from(self.top);
        x >= left
            && x <= left + i64::from(self.width)
            && y >= top
            && y <= top + i64::from(self.height)
    }

    /// Area used to rank overlapping boxes, `(width + 1) * (height + 1)`
    pub fn selection_area(&self) -> i64 {
        (i64::from(self.width) + 1) * (i64::from(self.height) + 1)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "box at ({}, {}) size {}x{}",
            self.left, self.top, self.width, self.height
        )
    }
}

/// Line segment between two distinct grid points
///
/// Endpoints are normalized so that `x1 <= x2` and `y1 <= y2`, which lets the
/// raw fields double as an inclusive bounding range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Edge {
    /// Build an edge from two arbitrary points
    ///
    /// The endpoints are normalized component-wise. Returns `None` when both
    /// points are identical.
    pub fn between(a: Point, b: Point) -> Option<Self> {
        Self::from_raw(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Build an edge from already-normalized endpoint fields
    ///
    /// Returns `None` for degenerate (zero length) or unnormalized input.
    pub const fn from_raw(x1: i32, y1: i32, x2: i32, y2: i32) -> Option<Self> {
        if x1 > x2 || y1 > y2 || (x1 == x2 && y1 == y2) {
            return None;
        }
        Some(Self { x1, y1, x2, y2 })
    }

    /// Endpoint with the smaller coordinates
    pub const fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Endpoint with the larger coordinates
    pub const fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Raw endpoint fields in storage order `[x1, y1, x2, y2]`
    pub const fn to_raw(&self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Test whether a grid point lies within the endpoint range
    pub fn contains(&self, point: Point) -> bool {
        (self.x1..=self.x2).contains(&point.x) && (self.y1..=self.y2).contains(&point.y)
    }

    /// Area used to rank overlapping edges, `(x2 - x1 + 1) * (y2 - y1 + 1)`
    pub fn selection_area(&self) -> i64 {
        (i64::from(self.x2) - i64::from(self.x1) + 1) * (i64::from(self.y2) - i64::from(self.y1) + 1)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge {} -> {}", self.start(), self.end())
    }
}

/// Any one stored shape, used to report what an edit touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Collision box
    Aabb(Aabb),
    /// Light or vertex anchor
    Point(Point),
    /// Occlusion edge
    Edge(Edge),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aabb(aabb) => aabb.fmt(f),
            Self::Point(point) => write!(f, "point {point}"),
            Self::Edge(edge) => edge.fmt(f),
        }
    }
}
