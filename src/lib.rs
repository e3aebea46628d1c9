//! Editor for pointybox tile metadata files
//!
//! A pointybox file stores, for every tile ID and each of the 47 autotile
//! bitmask classes, a set of collision boxes, a set of light points and a set
//! of occlusion edges, along with the tileset resolution. This crate holds the
//! data model, the shape construction and deletion rules, the binary codec and
//! a console front-end that drives them.

#![forbid(unsafe_code)]

/// Shape types and two-pick construction
pub mod geometry;
/// Command line, console loop, file codec and error handling
pub mod io;
/// Choosing which overlapping shape a deletion click removes
pub mod selection;
/// Editing session state and operations
pub mod session;
/// Tile and bitmask class indexed shape storage
pub mod store;

pub use io::error::{FormatError, PointyboxError, Result};
