//! Indexed storage of pointybox shape data

/// Autotile bitmask class catalog and neighbor classification
pub mod bitmask;
/// Resolution and whole-file model
pub mod document;
/// Ordered, deduplicated shape collections
pub mod shape_set;
/// Tile by class index of shape slots
pub mod tile_store;

pub use bitmask::BitmaskClass;
pub use document::{Pointybox, Resolution};
pub use tile_store::{ClassSlot, TileStore};
