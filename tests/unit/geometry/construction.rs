//! Tests for two-pick box and edge construction

#[cfg(test)]
mod tests {
    use boxedit::geometry::construction::{
        box_from_points, edge_endpoints_from_points, edge_from_picks, snap_second_point,
    };
    use boxedit::geometry::shapes::{Aabb, Point};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Tests a single cell picked twice covers one tile
    // Verified by dropping the +1 from the extent
    #[test]
    fn test_box_from_same_point_is_one_tile() {
        let aabb = box_from_points(Point::new(4, 7), Point::new(4, 7));

        assert_eq!(Some(aabb), Aabb::new(4, 7, 1, 1));
    }

    // Tests picks in any corner order give the same box
    // Verified by using the first pick as the corner
    #[test]
    fn test_box_from_points_is_symmetric() {
        let a = Point::new(2, 5);
        let b = Point::new(0, 1);

        assert_eq!(box_from_points(a, b), box_from_points(b, a));
        assert_eq!(Some(box_from_points(a, b)), Aabb::new(0, 1, 3, 5));
    }

    // Tests random pick pairs always produce a box covering both picks
    // Verified by swapping width and height
    #[test]
    fn test_box_from_points_covers_both_picks() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let a = Point::new(rng.random_range(-50..50), rng.random_range(-50..50));
            let b = Point::new(rng.random_range(-50..50), rng.random_range(-50..50));
            let aabb = box_from_points(a, b);

            assert!(aabb.contains(a), "{aabb} should contain {a}");
            assert!(aabb.contains(b), "{aabb} should contain {b}");
            assert!(aabb.width() >= 1 && aabb.height() >= 1);
            assert_eq!(aabb, box_from_points(b, a));
        }
    }

    // Tests picks at opposite integer limits keep a non-negative extent
    // Verified by subtracting without saturation
    #[test]
    fn test_box_from_extreme_points() {
        let aabb = box_from_points(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));

        assert_eq!(aabb.to_raw(), [i32::MIN, 0, i32::MAX, 1]);
        assert!(Aabb::new(aabb.left(), aabb.top(), aabb.width(), aabb.height()).is_some());
    }

    // Tests endpoints are the component-wise min and max
    // Verified by returning the picks unchanged
    #[test]
    fn test_edge_endpoints_from_points() {
        let (start, end) = edge_endpoints_from_points(Point::new(5, 1), Point::new(2, 3));

        assert_eq!(start, Point::new(2, 1));
        assert_eq!(end, Point::new(5, 3));
    }

    // Tests snapping toward the dominant axis, ties keeping the anchor column
    // Verified by using < instead of <= in the comparison
    #[test]
    fn test_snap_second_point() {
        let anchor = Point::new(0, 0);

        assert_eq!(snap_second_point(anchor, Point::new(3, 3)), Point::new(0, 3));
        assert_eq!(snap_second_point(anchor, Point::new(5, 2)), Point::new(5, 0));
        assert_eq!(snap_second_point(anchor, Point::new(2, -5)), Point::new(0, -5));
        assert_eq!(snap_second_point(anchor, Point::new(-4, 1)), Point::new(-4, 0));
    }

    // Tests diagonal drags become vertical edges from the anchor
    // Verified by skipping the snap step
    #[test]
    fn test_edge_from_diagonal_drag() {
        let edge = edge_from_picks(Point::new(0, 0), Point::new(3, 3));

        let Some(edge) = edge else {
            panic!("diagonal drag should produce an edge");
        };
        assert_eq!(edge.start(), Point::new(0, 0));
        assert_eq!(edge.end(), Point::new(0, 3));
    }

    // Tests dragging left of the anchor normalizes the endpoints
    // Verified by passing the snapped point as the start
    #[test]
    fn test_edge_from_leftward_drag() {
        let edge = edge_from_picks(Point::new(4, 4), Point::new(1, 5));

        assert_eq!(
            edge.map(|edge| edge.to_raw()),
            Some([1, 4, 4, 4]),
            "drag should snap onto the anchor row"
        );
    }

    // Tests a second pick on the anchor yields no edge
    // Verified by removing the degenerate check
    #[test]
    fn test_zero_length_edge_is_rejected() {
        assert!(edge_from_picks(Point::new(2, 2), Point::new(2, 2)).is_none());
    }
}
