//! Tests for pointybox encoding, decoding and file replacement

#[cfg(test)]
mod tests {
    use boxedit::FormatError;
    use boxedit::PointyboxError;
    use boxedit::geometry::construction::{box_from_points, edge_from_picks};
    use boxedit::geometry::shapes::{Aabb, Point};
    use boxedit::io::codec::{decode, encode, load, save};
    use boxedit::io::configuration::MAX_TILE_COUNT;
    use boxedit::store::bitmask::BitmaskClass;
    use boxedit::store::document::{Pointybox, Resolution};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::fs;
    use tempfile::TempDir;

    // Header plus 47 slots of three zero counts
    const EMPTY_FILE_LEN: usize = 16 + 47 * 3 * 4;

    fn temp_dir() -> TempDir {
        let Ok(dir) = TempDir::new() else {
            panic!("temporary directory unavailable");
        };
        dir
    }

    fn encoded(model: &Pointybox) -> Vec<u8> {
        let Ok(data) = encode(model) else {
            panic!("encoding failed");
        };
        data
    }

    fn header(width: u32, height: u32, tiles: u32) -> Vec<u8> {
        let mut data = b"PBOX".to_vec();
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        data.extend_from_slice(&tiles.to_le_bytes());
        data
    }

    // One tile where only class 0 has a box record, given raw
    fn single_box_file(fields: [i32; 4]) -> Vec<u8> {
        let mut data = header(8, 8, 1);
        data.extend_from_slice(&1u32.to_le_bytes());
        for field in fields {
            data.extend_from_slice(&field.to_le_bytes());
        }
        data.extend_from_slice(&[0; 8]);
        data.extend_from_slice(&vec![0; 46 * 12]);
        data
    }

    fn random_model(seed: u64) -> Pointybox {
        let mut rng = StdRng::seed_from_u64(seed);
        let resolution = Resolution::new(rng.random_range(1..32), rng.random_range(1..32))
            .unwrap_or_default();
        let mut model = Pointybox {
            resolution,
            ..Pointybox::default()
        };
        model.tiles.ensure_tile(rng.random_range(0..4));

        for _ in 0..60 {
            let tile = rng.random_range(0..model.tiles.tile_count());
            let class = BitmaskClass::new(rng.random_range(0..47)).unwrap_or_default();
            let a = Point::new(rng.random_range(-20..20), rng.random_range(-20..20));
            let b = Point::new(rng.random_range(-20..20), rng.random_range(-20..20));

            match rng.random_range(0..3) {
                0 => {
                    model.tiles.insert_aabb(tile, class, box_from_points(a, b));
                }
                1 => {
                    model.tiles.insert_point(tile, class, a);
                }
                _ => {
                    if let Some(edge) = edge_from_picks(a, b) {
                        model.tiles.insert_edge(tile, class, edge);
                    }
                }
            }
        }
        model
    }

    // Tests the empty model layout byte for byte
    // Verified by writing counts in big-endian order
    #[test]
    fn test_encode_empty_model() {
        let data = encoded(&Pointybox::default());

        assert_eq!(data.len(), EMPTY_FILE_LEN);
        assert_eq!(data.get(..16), Some(header(8, 8, 1).as_slice()));
        assert!(data.iter().skip(16).all(|&byte| byte == 0));
    }

    // Tests records are written in box, point, edge order for their slot
    // Verified by writing edges before points
    #[test]
    fn test_encode_record_layout() {
        let mut model = Pointybox::default();
        let class = BitmaskClass::ISLAND;
        model.tiles.insert_point(0, class, Point::new(-1, 2));

        let data = encoded(&model);
        let mut expected = header(8, 8, 1);
        expected.extend_from_slice(&0u32.to_le_bytes());
        expected.extend_from_slice(&1u32.to_le_bytes());
        expected.extend_from_slice(&(-1i32).to_le_bytes());
        expected.extend_from_slice(&2i32.to_le_bytes());
        expected.extend_from_slice(&0u32.to_le_bytes());
        expected.extend_from_slice(&vec![0; 46 * 12]);

        assert_eq!(data, expected);
    }

    // Tests random models survive a round trip and re-encode identically
    // Verified by dropping the last slot of each tile on decode
    #[test]
    fn test_round_trip_random_models() {
        for seed in 0..8 {
            let model = random_model(seed);
            let data = encoded(&model);

            let decoded = decode(&data);
            assert!(decoded.is_ok(), "seed {seed}: {decoded:?}");
            let Ok(decoded) = decoded else {
                continue;
            };
            assert_eq!(decoded, model, "seed {seed}");
            assert_eq!(encoded(&decoded), data, "seed {seed}");
        }
    }

    // Tests a zero-byte file is rejected as empty
    // Verified by treating empty input as a default model
    #[test]
    fn test_zero_byte_file() {
        assert!(matches!(decode(&[]), Err(FormatError::Empty)));
    }

    // Tests wrong magic bytes are rejected
    // Verified by skipping the magic comparison
    #[test]
    fn test_bad_magic() {
        let mut data = encoded(&Pointybox::default());
        if let Some(first) = data.first_mut() {
            *first = b'X';
        }

        assert!(matches!(decode(&data), Err(FormatError::BadMagic)));
    }

    // Tests data cut short at any slot boundary is rejected
    // Verified by stopping the slot loop at end of input
    #[test]
    fn test_truncated_file() {
        let data = encoded(&random_model(3));

        for cut in [3, 10, 20, data.len() - 1] {
            let result = decode(data.get(..cut).unwrap_or_default());
            assert!(
                matches!(
                    result,
                    Err(FormatError::Truncated { .. } | FormatError::CountExceedsData { .. })
                ),
                "cut at {cut}: {result:?}"
            );
        }
    }

    // Tests a record count larger than the remaining data is rejected before reading
    // Verified by removing the count check
    #[test]
    fn test_count_exceeds_data() {
        let mut data = header(8, 8, 1);
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        data.extend_from_slice(&vec![0; 47 * 12 - 4]);

        assert!(matches!(
            decode(&data),
            Err(FormatError::CountExceedsData {
                section: "box",
                declared: u32::MAX,
                ..
            })
        ));

        let many_tiles = header(8, 8, 5_000);
        assert!(matches!(
            decode(&many_tiles),
            Err(FormatError::CountExceedsData {
                section: "tile table",
                ..
            })
        ));
    }

    // Tests a tile count past the editor limit is refused from the header alone
    // Verified by allocating the declared tile table before checking it
    #[test]
    fn test_tile_count_over_limit() {
        let limit = u32::try_from(MAX_TILE_COUNT).unwrap_or(u32::MAX);

        for tiles in [limit + 1, u32::MAX] {
            assert!(matches!(
                decode(&header(8, 8, tiles)),
                Err(FormatError::InvalidRecord {
                    section: "header",
                    ..
                })
            ));
        }
    }

    // Tests boxes drawn between the integer limits survive a save and reload
    // Verified by computing the box extent without saturation
    #[test]
    fn test_extreme_boxes_round_trip() {
        let dir = temp_dir();
        let path = dir.path().join("extreme.pb");
        let corners = [
            (Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            (Point::new(i32::MAX, 0), Point::new(i32::MIN, -1)),
            (Point::new(i32::MAX, i32::MAX), Point::new(i32::MAX, i32::MAX)),
        ];

        let mut model = Pointybox::default();
        for (a, b) in corners {
            let aabb = box_from_points(a, b);
            assert!(aabb.width() >= 0 && aabb.height() >= 0, "{aabb}");
            model.tiles.insert_aabb(0, BitmaskClass::SURROUNDED, aabb);
        }
        assert!(Aabb::new(0, 0, -1, 2).is_none());

        assert!(save(&path, &model).is_ok());
        let loaded = load(&path);
        assert!(matches!(&loaded, Ok(loaded) if *loaded == model), "{loaded:?}");
    }

    // Tests leftover bytes after the last tile are rejected
    // Verified by ignoring trailing data
    #[test]
    fn test_trailing_bytes() {
        let mut data = encoded(&Pointybox::default());
        data.extend_from_slice(&[1, 2, 3]);

        assert!(matches!(
            decode(&data),
            Err(FormatError::TrailingBytes { count: 3 })
        ));
    }

    // Tests negative box extents and duplicate records are rejected
    // Verified by accepting every decoded record
    #[test]
    fn test_invalid_records() {
        assert!(decode(&single_box_file([0, 0, 2, 2])).is_ok());
        assert!(matches!(
            decode(&single_box_file([0, 0, -2, 2])),
            Err(FormatError::InvalidRecord { section: "box", .. })
        ));

        let mut duplicate = header(8, 8, 1);
        duplicate.extend_from_slice(&0u32.to_le_bytes());
        duplicate.extend_from_slice(&2u32.to_le_bytes());
        duplicate.extend_from_slice(&[5, 0, 0, 0, 6, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0]);
        duplicate.extend_from_slice(&0u32.to_le_bytes());
        duplicate.extend_from_slice(&vec![0; 46 * 12]);
        assert!(matches!(
            decode(&duplicate),
            Err(FormatError::InvalidRecord {
                section: "point",
                reason: "duplicate record"
            })
        ));
    }

    // Tests a degenerate edge record is rejected
    // Verified by building edges without validation
    #[test]
    fn test_degenerate_edge_record() {
        let mut data = header(8, 8, 1);
        data.extend_from_slice(&[0; 8]);
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&[1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0]);
        data.extend_from_slice(&vec![0; 46 * 12]);

        assert!(matches!(
            decode(&data),
            Err(FormatError::InvalidRecord { section: "edge", .. })
        ));
    }

    // Tests a zero tile count and zero resolution fall back to defaults
    // Verified by rejecting a zero tile count
    #[test]
    fn test_header_defaults() {
        let result = decode(&header(0, 5, 0));

        let Ok(model) = result else {
            panic!("header-only file should decode: {result:?}");
        };
        assert_eq!(model.tiles.tile_count(), 1);
        assert_eq!(model.resolution, Resolution::default());
    }

    // Tests save followed by load reproduces the model
    // Verified by saving without the resolution header
    #[test]
    fn test_save_then_load() {
        let dir = temp_dir();
        let path = dir.path().join("tiles.pb");
        let model = random_model(11);

        assert!(save(&path, &model).is_ok());
        let loaded = load(&path);
        assert!(matches!(&loaded, Ok(loaded) if *loaded == model));

        let replacement = Pointybox::default();
        assert!(save(&path, &replacement).is_ok());
        assert_eq!(fs::read(&path).map(|data| data.len()).ok(), Some(EMPTY_FILE_LEN));
    }

    // Tests a missing file reports an unreadable error
    // Verified by returning a default model for missing files
    #[test]
    fn test_load_missing_file() {
        let dir = temp_dir();

        assert!(matches!(
            load(&dir.path().join("absent.pb")),
            Err(FormatError::Unreadable { .. })
        ));
    }

    // Tests a failed save leaves the target and directory untouched
    // Verified by writing straight to the target path
    #[test]
    fn test_failed_save_leaves_target() {
        let dir = temp_dir();
        let target = dir.path().join("occupied");
        assert!(fs::create_dir(&target).is_ok());
        assert!(fs::write(target.join("keep.txt"), b"keep").is_ok());

        let result = save(&target, &Pointybox::default());

        assert!(matches!(result, Err(PointyboxError::FileSystem { .. })));
        assert_eq!(fs::read(target.join("keep.txt")).ok(), Some(b"keep".to_vec()));
        let entries = fs::read_dir(dir.path()).map(Iterator::count).ok();
        assert_eq!(entries, Some(1), "temporary file should be cleaned up");
    }

    // Tests saving into a missing directory fails without panicking
    // Verified by unwrapping the temporary file creation
    #[test]
    fn test_save_into_missing_directory() {
        let dir = temp_dir();
        let path = dir.path().join("missing").join("tiles.pb");

        assert!(save(&path, &Pointybox::default()).is_err());
        assert!(!path.exists());
    }
}
