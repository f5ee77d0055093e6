//! Tests for thresholding and the center-of-pressure search

#[cfg(test)]
mod tests {
    use pixwarp::PixwarpError;
    use pixwarp::analysis::pressure::{center_of_pressure, clear_bright_pixels};
    use pixwarp::raster::picture::Picture;
    use pixwarp::raster::point::Point;

    fn marked_column() -> Picture {
        Picture::from_fn(3, 3, |x, _| if x == 2 { 0.1 } else { 1.0 }).expect("valid picture")
    }

    // Tests the pixel with the smallest mean filtered distance wins
    // Verified by dividing by the total pixel count instead of the filtered count
    #[test]
    fn test_center_of_marked_column() {
        let mut picture = marked_column();
        let center = center_of_pressure(&mut picture).expect("non-empty picture");
        assert_eq!(center, Point::new(2, 1));
    }

    // Tests the search thresholds the picture in place
    // Verified by searching a private copy
    #[test]
    fn test_search_clears_bright_pixels() {
        let mut picture = marked_column();
        center_of_pressure(&mut picture).expect("non-empty picture");
        for y in 0..3 {
            assert_eq!(picture.get(0, y), Some(0.0));
            assert_eq!(picture.get(1, y), Some(0.0));
            assert_eq!(picture.get(2, y), Some(0.1));
        }
    }

    // Tests ties resolve to the first pixel in scan order
    // Verified by using <= when comparing distances
    #[test]
    fn test_ties_keep_first_pixel() {
        // No marks survive and no pixel passes the filter
        let mut picture = Picture::from_fn(1, 1, |_, _| 1.0).expect("valid picture");
        assert_eq!(
            center_of_pressure(&mut picture).expect("non-empty picture"),
            Point::new(0, 0)
        );

        let mut symmetric =
            Picture::from_fn(2, 2, |x, y| if x == y { 0.05 } else { 0.9 }).expect("valid picture");
        assert_eq!(
            center_of_pressure(&mut symmetric).expect("non-empty picture"),
            Point::new(0, 0)
        );
    }

    // Tests inactive pixels on the candidate's row or column are excluded
    // Verified by excluding only the candidate pixel itself
    #[test]
    fn test_filter_requires_both_axes_to_differ() {
        // Every pixel shares the single row, so no pixel qualifies and all score 0
        let mut row = Picture::from_fn(3, 1, |_, _| 0.9).expect("valid picture");
        assert_eq!(
            center_of_pressure(&mut row).expect("non-empty picture"),
            Point::new(0, 0)
        );
    }

    // Tests the threshold boundary is inclusive
    // Verified by comparing with > instead of >=
    #[test]
    fn test_clear_bright_pixels_threshold() {
        let mut picture = Picture::from_vec(4, 1, vec![0.19, 0.2, 0.7, 0.0]).expect("valid picture");
        clear_bright_pixels(&mut picture);
        let expected = Picture::from_vec(4, 1, vec![0.19, 0.0, 0.0, 0.0]).expect("valid picture");
        assert_eq!(picture, expected);
    }

    // Tests empty pictures are rejected
    // Verified by returning the origin for empty input
    #[test]
    fn test_empty_picture_is_rejected() {
        let mut picture = Picture::new(0, 0);
        assert!(matches!(
            center_of_pressure(&mut picture),
            Err(PixwarpError::EmptyImage { .. })
        ));
    }
}
