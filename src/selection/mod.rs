//! Resolution of deletion clicks against overlapping shapes

/// Smallest-footprint candidate search
pub mod resolver;

pub use resolver::{Footprint, resolve, resolve_aabb, resolve_edge};
