//! Shape types and the pure constructions that turn grid picks into shapes

/// Two-pick construction of boxes and axis-snapped edges
pub mod construction;
/// Grid point, box and edge value types
pub mod shapes;

pub use shapes::{Aabb, Edge, Point, Shape};
