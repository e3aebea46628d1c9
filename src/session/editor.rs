//! Editor session
//!
//! Holds the model being edited together with the cursor state the input
//! layer works against: current tile, bitmask class, edit mode and a
//! pending first pick. Every operation runs synchronously on the owned
//! model and reports an explicit outcome.

use std::path::Path;

use crate::geometry::construction::{box_from_points, edge_from_picks};
use crate::geometry::shapes::{Point, Shape};
use crate::io::codec;
use crate::io::error::Result;
use crate::selection::resolver::{resolve_aabb, resolve_edge};
use crate::session::mode::{DeleteOutcome, EditMode, EditOutcome, LoadStatus};
use crate::store::bitmask::BitmaskClass;
use crate::store::document::{Pointybox, Resolution};
use crate::store::tile_store::TileStore;

/// Editing state over one pointybox model
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    document: Pointybox,
    tile: usize,
    class: BitmaskClass,
    mode: EditMode,
    anchor: Option<Point>,
}

impl EditorSession {
    /// Start a session on tile 0, class 0, box mode
    pub fn new(document: Pointybox) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    /// Replace the model with the contents of a file
    ///
    /// An unreadable file leaves the session on an empty default model.
    /// Either way the cursor returns to tile 0, class 0.
    pub fn load(&mut self, path: &Path) -> LoadStatus {
        let (document, status) = match codec::load(path) {
            Ok(document) => (document, LoadStatus::Loaded),
            Err(error) => {
                log::warn!("{} is not a valid pointybox file: {error}", path.display());
                (Pointybox::default(), LoadStatus::UsingDefaults(error))
            }
        };
        *self = Self {
            mode: self.mode,
            ..Self::new(document)
        };
        status
    }

    /// Write the model to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written. The in-memory model is
    /// unaffected.
    pub fn save(&self, path: &Path) -> Result<()> {
        codec::save(path, &self.document)
    }

    /// Shape data being edited
    pub const fn tiles(&self) -> &TileStore {
        &self.document.tiles
    }

    /// Declared tileset resolution
    pub const fn resolution(&self) -> Resolution {
        self.document.resolution
    }

    /// Grow or shrink the resolution, never below one tile per axis
    pub fn resize_resolution(&mut self, delta_width: i32, delta_height: i32) -> Resolution {
        self.document.resolution = self.document.resolution.resized(delta_width, delta_height);
        self.document.resolution
    }

    /// Tile currently being edited
    pub const fn current_tile(&self) -> usize {
        self.tile
    }

    /// Switch tiles, appending empty tiles when `tile` is past the end
    ///
    /// Returns false and keeps the current tile when `tile` is past the
    /// tile limit.
    pub fn set_tile(&mut self, tile: usize) -> bool {
        match self.document.tiles.ensure_tile(tile) {
            Some(appended) => {
                if appended > 0 {
                    log::debug!(
                        "Tile store grown by {appended} to {} tiles",
                        self.document.tiles.tile_count()
                    );
                }
                self.tile = tile;
                true
            }
            None => {
                log::debug!("Tile {tile} is past the tile limit");
                false
            }
        }
    }

    /// Advance to the next tile, appending one when at the end
    ///
    /// Returns false at the last tile the limit allows.
    pub fn next_tile(&mut self) -> bool {
        self.tile
            .checked_add(1)
            .is_some_and(|tile| self.set_tile(tile))
    }

    /// Step back one tile, stopping at 0
    pub fn previous_tile(&mut self) {
        self.tile = self.tile.saturating_sub(1);
    }

    /// Bitmask class currently being edited
    pub const fn current_class(&self) -> BitmaskClass {
        self.class
    }

    /// Switch to a class by index; returns false and keeps the current class
    /// when the index is past the last class
    pub fn set_class(&mut self, index: usize) -> bool {
        BitmaskClass::new(index).is_some_and(|class| {
            self.class = class;
            true
        })
    }

    /// Move to the following class, stopping at the last one
    pub fn next_class(&mut self) {
        self.class = self.class.next().unwrap_or(self.class);
    }

    /// Move to the preceding class, stopping at the first one
    pub fn previous_class(&mut self) {
        self.class = self.class.previous().unwrap_or(self.class);
    }

    /// Active edit mode
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switch modes, discarding any pending first pick
    pub const fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
        self.anchor = None;
    }

    /// Advance to the next mode in the cycle
    pub const fn cycle_mode(&mut self) -> EditMode {
        self.set_mode(self.mode.next());
        self.mode
    }

    /// Pending first pick of a two-pick shape
    pub const fn pending_anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Start a shape at `point`
    ///
    /// In point mode the point is inserted immediately; otherwise it becomes
    /// the anchor for [`Self::complete_shape`].
    pub fn begin_shape(&mut self, point: Point) -> EditOutcome {
        if self.mode.is_two_pick() {
            self.anchor = Some(point);
            return EditOutcome::AnchorSet;
        }

        let shape = Shape::Point(point);
        if self.document.tiles.insert_point(self.tile, self.class, point) {
            EditOutcome::Inserted(shape)
        } else {
            EditOutcome::AlreadyPresent(shape)
        }
    }

    /// Finish the pending shape with its second pick at `point`
    ///
    /// A zero-length edge is rejected and the anchor stays pending so the
    /// user can pick again.
    pub fn complete_shape(&mut self, point: Point) -> EditOutcome {
        let Some(anchor) = self.anchor else {
            return EditOutcome::NoAnchor;
        };

        let (shape, inserted) = match self.mode {
            EditMode::Aabb => {
                let aabb = box_from_points(point, anchor);
                let inserted = self.document.tiles.insert_aabb(self.tile, self.class, aabb);
                (Shape::Aabb(aabb), inserted)
            }
            EditMode::Edge => {
                let Some(edge) = edge_from_picks(anchor, point) else {
                    return EditOutcome::Degenerate;
                };
                let inserted = self.document.tiles.insert_edge(self.tile, self.class, edge);
                (Shape::Edge(edge), inserted)
            }
            EditMode::Point => return EditOutcome::NoAnchor,
        };

        self.anchor = None;
        if inserted {
            EditOutcome::Inserted(shape)
        } else {
            EditOutcome::AlreadyPresent(shape)
        }
    }

    /// Left click: begin a shape, or complete the pending one
    pub fn click(&mut self, point: Point) -> EditOutcome {
        if self.anchor.is_some() {
            self.complete_shape(point)
        } else {
            self.begin_shape(point)
        }
    }

    /// Right click: cancel a pending pick, or delete the shape under `point`
    ///
    /// Boxes and edges go through smallest-footprint resolution; points must
    /// match exactly.
    pub fn delete_at(&mut self, point: Point) -> DeleteOutcome {
        if self.anchor.take().is_some() {
            return DeleteOutcome::Cancelled;
        }

        let (tile, class) = (self.tile, self.class);
        let tiles = &mut self.document.tiles;
        let removed = match self.mode {
            EditMode::Aabb => resolve_aabb(tiles, tile, class, point)
                .and_then(|index| tiles.remove_aabb(tile, class, index))
                .map(Shape::Aabb),
            EditMode::Point => tiles
                .remove_point_at(tile, class, point)
                .then_some(Shape::Point(point)),
            EditMode::Edge => resolve_edge(tiles, tile, class, point)
                .and_then(|index| tiles.remove_edge(tile, class, index))
                .map(Shape::Edge),
        };

        removed.map_or(DeleteOutcome::Missed, DeleteOutcome::Removed)
    }

    /// Multi-line summary of the cursor state for display
    pub fn status(&self) -> String {
        let pending = self
            .anchor
            .map(|anchor| format!("\nFirst pick: {anchor}"))
            .unwrap_or_default();
        format!(
            "Mode: {}\nBitmask: {} - {} tile\nCurrent ID: {} of {}\nResolution: {}{pending}",
            self.mode,
            self.class.index(),
            self.class.description(),
            self.tile,
            self.document.tiles.tile_count(),
            self.document.resolution
        )
    }
}
