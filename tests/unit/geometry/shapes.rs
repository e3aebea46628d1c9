//! Tests for point, box and edge value types

#[cfg(test)]
mod tests {
    use boxedit::geometry::shapes::{Aabb, Edge, Point, Shape};

    // Tests negative extents are refused
    // Verified by accepting any extent
    #[test]
    fn test_aabb_rejects_negative_extent() {
        assert!(Aabb::new(0, 0, -1, 2).is_none());
        assert!(Aabb::new(0, 0, 2, -1).is_none());
        assert!(Aabb::new(-5, -5, 0, 0).is_some());
    }

    // Tests accessors report the fields in storage order
    // Verified by swapping the left and top accessors
    #[test]
    fn test_aabb_accessors() {
        let Some(aabb) = Aabb::new(-3, 4, 5, 0) else {
            panic!("valid box rejected");
        };

        assert_eq!((aabb.left(), aabb.top()), (-3, 4));
        assert_eq!((aabb.width(), aabb.height()), (5, 0));
        assert_eq!(aabb.to_raw(), [-3, 4, 5, 0]);
    }

    // Tests the covering box is the same whichever corner comes first
    // Verified by taking the first corner as the top-left
    #[test]
    fn test_aabb_covering() {
        let a = Point::new(5, -1);
        let b = Point::new(2, 3);

        assert_eq!(Aabb::covering(a, b), Aabb::covering(b, a));
        assert_eq!(Aabb::covering(a, b).to_raw(), [2, -1, 4, 5]);
    }

    // Tests containment includes the far column and row
    // Verified by using < for the far bound
    #[test]
    fn test_aabb_contains_is_inclusive() {
        let Some(aabb) = Aabb::new(1, 1, 2, 3) else {
            panic!("valid box rejected");
        };

        assert!(aabb.contains(Point::new(1, 1)));
        assert!(aabb.contains(Point::new(3, 4)));
        assert!(!aabb.contains(Point::new(4, 4)));
        assert!(!aabb.contains(Point::new(3, 5)));
        assert!(!aabb.contains(Point::new(0, 2)));
    }

    // Tests containment near the integer limits does not overflow
    // Verified by computing the far bound in i32
    #[test]
    fn test_aabb_contains_at_limits() {
        let Some(aabb) = Aabb::new(i32::MAX - 1, 0, i32::MAX, 0) else {
            panic!("valid box rejected");
        };

        assert!(aabb.contains(Point::new(i32::MAX, 0)));
    }

    // Tests selection area adds one per axis
    // Verified by using width * height
    #[test]
    fn test_aabb_selection_area() {
        let Some(aabb) = Aabb::new(0, 0, 2, 3) else {
            panic!("valid box rejected");
        };

        assert_eq!(aabb.selection_area(), 12);
    }

    // Tests edges are normalized whatever the pick order
    // Verified by storing the points unsorted
    #[test]
    fn test_edge_between_normalizes() {
        let edge = Edge::between(Point::new(5, 2), Point::new(1, 2));

        assert_eq!(edge.map(|edge| edge.to_raw()), Some([1, 2, 5, 2]));
    }

    // Tests raw construction rejects degenerate and unnormalized input
    // Verified by removing the ordering check
    #[test]
    fn test_edge_from_raw_validation() {
        assert!(Edge::from_raw(0, 0, 0, 0).is_none());
        assert!(Edge::from_raw(3, 0, 1, 0).is_none());
        assert!(Edge::from_raw(0, 4, 0, 1).is_none());
        assert!(Edge::from_raw(0, 1, 0, 4).is_some());
    }

    // Tests edge containment and area over the endpoint range
    // Verified by excluding the end point
    #[test]
    fn test_edge_contains_and_area() {
        let Some(edge) = Edge::from_raw(2, 1, 2, 4) else {
            panic!("valid edge rejected");
        };

        assert!(edge.contains(Point::new(2, 1)));
        assert!(edge.contains(Point::new(2, 4)));
        assert!(!edge.contains(Point::new(3, 2)));
        assert_eq!(edge.selection_area(), 4);
    }

    // Tests display text for each shape kind
    // Verified by swapping the box size fields
    #[test]
    fn test_shape_display() {
        assert_eq!(
            Aabb::new(2, 2, 3, 4).map(|aabb| Shape::Aabb(aabb).to_string()),
            Some("box at (2, 2) size 3x4".to_string())
        );
        assert_eq!(Shape::Point(Point::new(-1, 7)).to_string(), "point (-1, 7)");

        let edge = Edge::between(Point::new(0, 3), Point::new(0, 0));
        assert_eq!(
            edge.map(|edge| Shape::Edge(edge).to_string()),
            Some("edge (0, 0) -> (0, 3)".to_string())
        );
    }
}
