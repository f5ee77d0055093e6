//! Tests for elliptical lattice neighborhoods

#[cfg(test)]
mod tests {
    use pixwarp::analysis::neighborhood::{
        ellipse_neighborhood, ellipse_neighborhood_within, in_ellipse,
    };
    use pixwarp::raster::picture::Picture;
    use pixwarp::raster::point::Point;

    fn points(pairs: &[(i32, i32)]) -> Vec<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    // Tests zero semi-axes yield only the center
    // Verified by returning an empty iterator for a degenerate ellipse
    #[test]
    fn test_zero_axes_yield_center() {
        let center = Point::new(-3, 8);
        let found: Vec<Point> = ellipse_neighborhood(center, 0, 0).collect();
        assert_eq!(found, vec![center]);
    }

    // Tests the unit disc and its column-major order
    // Verified by iterating rows in the outer loop
    #[test]
    fn test_unit_disc() {
        let found: Vec<Point> = ellipse_neighborhood(Point::new(0, 0), 1, 1).collect();
        assert_eq!(found, points(&[(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)]));
    }

    // Tests a wide ellipse excludes the diagonal neighbors
    // Verified by swapping the semi-axes in the membership test
    #[test]
    fn test_wide_ellipse() {
        let found: Vec<Point> = ellipse_neighborhood(Point::new(5, 5), 2, 1).collect();
        assert_eq!(
            found,
            points(&[(3, 5), (4, 5), (5, 4), (5, 5), (5, 6), (6, 5), (7, 5)])
        );
    }

    // Tests a single zero axis degenerates to a segment
    // Verified by dividing by the semi-axes
    #[test]
    fn test_zero_width_is_segment() {
        let found: Vec<Point> = ellipse_neighborhood(Point::new(1, 1), 0, 2).collect();
        assert_eq!(found, points(&[(1, -1), (1, 0), (1, 1), (1, 2), (1, 3)]));
    }

    // Tests the point set is symmetric about the center
    // Verified by using the XOR of the axis terms
    #[test]
    fn test_point_reflection_symmetry() {
        let center = Point::new(4, -1);
        let found: Vec<Point> = ellipse_neighborhood(center, 3, 2).collect();
        assert!(!found.is_empty());
        for p in &found {
            let mirrored = Point::new(2 * center.x - p.x, 2 * center.y - p.y);
            assert!(found.contains(&mirrored), "{mirrored:?} missing");
            assert!(in_ellipse(*p, center, 3, 2));
        }
    }

    // Tests a clone continues independently from the same position
    // Verified by sharing the cursor between clones
    #[test]
    fn test_clone_restarts_from_current_position() {
        let mut neighborhood = ellipse_neighborhood(Point::new(0, 0), 2, 2);
        let first = neighborhood.next();
        let rest: Vec<Point> = neighborhood.clone().collect();
        let again: Vec<Point> = neighborhood.collect();
        assert_eq!(first, Some(Point::new(-2, 0)));
        assert_eq!(rest, again);
    }

    // Tests the picture-bounded variant drops points outside the picture
    // Verified by clipping only the upper bound
    #[test]
    fn test_within_clips_to_picture() {
        let picture = Picture::new(4, 4);
        let found: Vec<Point> =
            ellipse_neighborhood_within(&picture, Point::new(0, 0), 1, 1).collect();
        assert_eq!(found, points(&[(0, 0), (0, 1), (1, 0)]));

        let empty = Picture::new(0, 0);
        assert_eq!(
            ellipse_neighborhood_within(&empty, Point::new(0, 0), 2, 2).count(),
            0
        );
    }

    // Tests the box is clamped at the edge of the lattice
    // Verified by adding the semi-axis without clamping
    #[test]
    fn test_lattice_edge_is_clamped() {
        let found: Vec<Point> = ellipse_neighborhood(Point::new(i32::MAX, 0), 2, 0).collect();
        assert_eq!(
            found,
            points(&[(i32::MAX - 2, 0), (i32::MAX - 1, 0), (i32::MAX, 0)])
        );
    }

    // Tests membership for extreme coordinates does not overflow
    // Verified by evaluating the products in i64
    #[test]
    fn test_membership_extreme_values() {
        assert!(in_ellipse(
            Point::new(i32::MAX, 0),
            Point::new(i32::MIN, 0),
            u32::MAX,
            u32::MAX
        ));
        assert!(!in_ellipse(
            Point::new(i32::MAX, 1),
            Point::new(i32::MIN, 0),
            u32::MAX,
            u32::MAX
        ));
        assert!(!in_ellipse(Point::new(1, 0), Point::new(0, 0), 0, 5));
    }

    // Tests degenerate ellipses reject points far beyond the box
    // Verified by dropping the bounding-box check from the membership test
    #[test]
    fn test_zero_axes_reject_distant_points() {
        let origin = Point::new(0, 0);

        assert!(in_ellipse(Point::new(0, 3), origin, 0, 3));
        assert!(in_ellipse(Point::new(0, -3), origin, 0, 3));
        assert!(!in_ellipse(Point::new(0, 100), origin, 0, 3));
        assert!(!in_ellipse(Point::new(1, 0), origin, 0, 3));

        assert!(!in_ellipse(Point::new(40, 0), origin, 3, 0));
        assert!(in_ellipse(Point::new(-3, 0), origin, 3, 0));

        assert!(in_ellipse(origin, origin, 0, 0));
        assert!(!in_ellipse(Point::new(57, -90), origin, 0, 0));
        assert!(!in_ellipse(Point::new(0, 1), origin, 0, 0));
    }
}
