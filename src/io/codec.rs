//! Binary pointybox load and save
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! b"PBOX" | width u32 | height u32 | tile_count u32
//! tile_count x 47 slots, tile-major, class ascending, each:
//!   u32 n, n x { left i32, top i32, width i32, height i32 }
//!   u32 n, n x { x i32, y i32 }
//!   u32 n, n x { x1 i32, y1 i32, x2 i32, y2 i32 }
//! ```
//!
//! Loading never panics; structural problems come back as [`FormatError`].
//! Saving writes a sibling temporary file and renames it over the target.

use std::io::Write;
use std::path::Path;

use crate::geometry::shapes::{Aabb, Edge, Point};
use crate::io::configuration::{
    AABB_RECORD_LEN, BITMASK_CLASS_COUNT, COUNT_LEN, EDGE_RECORD_LEN, FILE_MAGIC, HEADER_LEN,
    MAX_TILE_COUNT, POINT_RECORD_LEN,
};
use crate::io::error::{FormatError, PointyboxError, Result, invalid_parameter};
use crate::store::document::{Pointybox, Resolution};
use crate::store::shape_set::ShapeSet;
use crate::store::tile_store::{ClassSlot, TileStore};

/// Read and decode a pointybox file
///
/// # Errors
///
/// Returns a [`FormatError`] if the file cannot be read or does not hold a
/// well-formed pointybox layout.
pub fn load(path: &Path) -> std::result::Result<Pointybox, FormatError> {
    let data = std::fs::read(path).map_err(|source| FormatError::Unreadable { source })?;
    let pointybox = decode(&data)?;
    let totals = pointybox.tiles.totals();
    log::info!(
        "Loaded pointybox file {} ({} tiles, {} boxes, {} points, {} edges)",
        path.display(),
        pointybox.tiles.tile_count(),
        totals.aabbs,
        totals.points,
        totals.edges
    );
    Ok(pointybox)
}

/// Encode and write a pointybox file, replacing any existing one
///
/// # Errors
///
/// Returns an error if a collection is too large for the format or the
/// temporary file cannot be created, written or moved into place.
pub fn save(path: &Path, pointybox: &Pointybox) -> Result<()> {
    let data = encode(pointybox)?;

    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged =
        tempfile::NamedTempFile::new_in(directory).map_err(|e| PointyboxError::FileSystem {
            path: directory.to_path_buf(),
            operation: "create temporary file",
            source: e,
        })?;

    staged
        .write_all(&data)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| PointyboxError::FileSystem {
            path: staged.path().to_path_buf(),
            operation: "write",
            source: e,
        })?;

    staged.persist(path).map_err(|e| PointyboxError::FileSystem {
        path: path.to_path_buf(),
        operation: "replace",
        source: e.error,
    })?;

    log::info!("Saved pointybox file {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Decode an in-memory pointybox image
///
/// # Errors
///
/// Returns a [`FormatError`] describing the first structural problem found.
pub fn decode(data: &[u8]) -> std::result::Result<Pointybox, FormatError> {
    if data.is_empty() {
        return Err(FormatError::Empty);
    }

    let mut reader = ByteReader::new(data);
    if reader.take(FILE_MAGIC.len(), "header")? != FILE_MAGIC.as_slice() {
        return Err(FormatError::BadMagic);
    }

    let width = reader.read_u32("header")?;
    let height = reader.read_u32("header")?;
    let resolution = Resolution::new(width, height).unwrap_or_else(|| {
        log::warn!("Unusable resolution {width}x{height}, using the default");
        Resolution::default()
    });

    let tile_count = reader.read_u32("header")?;
    if tile_count as usize > MAX_TILE_COUNT {
        return Err(FormatError::InvalidRecord {
            section: "header",
            reason: "tile count exceeds the editor limit",
        });
    }
    // Every tile needs at least its 47 x 3 count fields
    let minimum_tile_len = BITMASK_CLASS_COUNT * 3 * COUNT_LEN;
    reader.check_count(tile_count, minimum_tile_len, "tile table")?;

    let slot_count = tile_count as usize * BITMASK_CLASS_COUNT;
    let mut slots = Vec::with_capacity(slot_count);
    for _ in 0..slot_count {
        slots.push(read_slot(&mut reader)?);
    }

    if reader.remaining() > 0 {
        return Err(FormatError::TrailingBytes {
            count: reader.remaining(),
        });
    }

    let tiles = TileStore::from_slots(slots).ok_or(FormatError::InvalidRecord {
        section: "tile table",
        reason: "slot count is not a whole number of tiles",
    })?;

    Ok(Pointybox::new(resolution, tiles))
}

/// Encode a model into the on-disk layout
///
/// # Errors
///
/// Returns an error if the tile count or any collection length does not fit
/// in a 32-bit count field.
pub fn encode(pointybox: &Pointybox) -> Result<Vec<u8>> {
    let tiles = &pointybox.tiles;
    let mut data =
        Vec::with_capacity(HEADER_LEN + tiles.tile_count() * BITMASK_CLASS_COUNT * 3 * COUNT_LEN);

    data.extend_from_slice(FILE_MAGIC);
    data.extend_from_slice(&pointybox.resolution.width().to_le_bytes());
    data.extend_from_slice(&pointybox.resolution.height().to_le_bytes());
    write_count(&mut data, tiles.tile_count(), "tile count")?;

    for tile in 0..tiles.tile_count() {
        for slot in tiles.tile_slots(tile) {
            write_count(&mut data, slot.aabbs.len(), "box count")?;
            for aabb in &slot.aabbs {
                write_fields(&mut data, aabb.to_raw());
            }

            write_count(&mut data, slot.points.len(), "point count")?;
            for point in &slot.points {
                write_fields(&mut data, [point.x, point.y]);
            }

            write_count(&mut data, slot.edges.len(), "edge count")?;
            for edge in &slot.edges {
                write_fields(&mut data, edge.to_raw());
            }
        }
    }

    Ok(data)
}

fn write_count(data: &mut Vec<u8>, count: usize, parameter: &'static str) -> Result<()> {
    let count = u32::try_from(count).map_err(|e| invalid_parameter(parameter, &count, &e))?;
    data.extend_from_slice(&count.to_le_bytes());
    Ok(())
}

fn write_fields<const N: usize>(data: &mut Vec<u8>, fields: [i32; N]) {
    for field in fields {
        data.extend_from_slice(&field.to_le_bytes());
    }
}

fn read_slot(reader: &mut ByteReader<'_>) -> std::result::Result<ClassSlot, FormatError> {
    let mut slot = ClassSlot::default();

    let count = reader.read_u32("box count")?;
    reader.check_count(count, AABB_RECORD_LEN, "box")?;
    for _ in 0..count {
        let [left, top, width, height] = reader.read_fields("box")?;
        let aabb = Aabb::new(left, top, width, height).ok_or(FormatError::InvalidRecord {
            section: "box",
            reason: "negative extent",
        })?;
        insert_unique(&mut slot.aabbs, aabb, "box")?;
    }

    let count = reader.read_u32("point count")?;
    reader.check_count(count, POINT_RECORD_LEN, "point")?;
    for _ in 0..count {
        let [x, y] = reader.read_fields("point")?;
        insert_unique(&mut slot.points, Point::new(x, y), "point")?;
    }

    let count = reader.read_u32("edge count")?;
    reader.check_count(count, EDGE_RECORD_LEN, "edge")?;
    for _ in 0..count {
        let [x1, y1, x2, y2] = reader.read_fields("edge")?;
        let edge = Edge::from_raw(x1, y1, x2, y2).ok_or(FormatError::InvalidRecord {
            section: "edge",
            reason: "endpoints are equal or out of order",
        })?;
        insert_unique(&mut slot.edges, edge, "edge")?;
    }

    Ok(slot)
}

fn insert_unique<T: PartialEq>(
    set: &mut ShapeSet<T>,
    value: T,
    section: &'static str,
) -> std::result::Result<(), FormatError> {
    if set.insert(value) {
        Ok(())
    } else {
        Err(FormatError::InvalidRecord {
            section,
            reason: "duplicate record",
        })
    }
}

/// Forward-only cursor over file bytes
struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    const fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    fn take(
        &mut self,
        len: usize,
        section: &'static str,
    ) -> std::result::Result<&'a [u8], FormatError> {
        let bytes = self
            .offset
            .checked_add(len)
            .and_then(|end| self.data.get(self.offset..end))
            .ok_or(FormatError::Truncated {
                section,
                offset: self.offset,
            })?;
        self.offset += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(
        &mut self,
        section: &'static str,
    ) -> std::result::Result<[u8; N], FormatError> {
        let mut array = [0; N];
        array.copy_from_slice(self.take(N, section)?);
        Ok(array)
    }

    fn read_u32(&mut self, section: &'static str) -> std::result::Result<u32, FormatError> {
        self.take_array(section).map(u32::from_le_bytes)
    }

    fn read_fields<const N: usize>(
        &mut self,
        section: &'static str,
    ) -> std::result::Result<[i32; N], FormatError> {
        let mut fields = [0; N];
        for field in &mut fields {
            *field = self.take_array(section).map(i32::from_le_bytes)?;
        }
        Ok(fields)
    }

    // Rejects counts that cannot fit before allocating or looping over them
    fn check_count(
        &self,
        declared: u32,
        record_len: usize,
        section: &'static str,
    ) -> std::result::Result<(), FormatError> {
        let needed = (declared as usize).checked_mul(record_len);
        if needed.is_some_and(|needed| needed <= self.remaining()) {
            Ok(())
        } else {
            Err(FormatError::CountExceedsData {
                section,
                declared,
                remaining: self.remaining(),
            })
        }
    }
}
