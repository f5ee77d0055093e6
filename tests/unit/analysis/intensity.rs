//! Tests for contrast stretching and mean intensity

#[cfg(test)]
mod tests {
    use pixwarp::PixwarpError;
    use pixwarp::analysis::intensity::{mean_intensity, rescale_intensity};
    use pixwarp::raster::picture::Picture;

    // Tests the darkest pixel maps to 0 and the brightest to 1
    // Verified by dividing by the maximum instead of the span
    #[test]
    fn test_rescale_stretches_range() {
        let picture = Picture::from_vec(3, 1, vec![0.25, 0.5, 0.75]).expect("valid picture");
        let stretched = rescale_intensity(&picture).expect("non-flat picture");
        let expected = Picture::from_vec(3, 1, vec![0.0, 0.5, 1.0]).expect("valid picture");
        assert_eq!(stretched, expected);
    }

    // Tests a full-range picture is unchanged
    // Verified by offsetting by the seeded minimum
    #[test]
    fn test_rescale_full_range_is_identity() {
        let picture = Picture::from_vec(2, 2, vec![0.0, 1.0, 0.5, 0.25]).expect("valid picture");
        assert_eq!(rescale_intensity(&picture).expect("non-flat picture"), picture);
    }

    // Tests flat and empty pictures are rejected
    // Verified by dividing by a zero span
    #[test]
    fn test_rescale_rejects_degenerate_input() {
        let flat = Picture::from_fn(3, 2, |_, _| 0.4).expect("valid picture");
        assert!(matches!(
            rescale_intensity(&flat),
            Err(PixwarpError::DegenerateRange { .. })
        ));
        assert!(matches!(
            rescale_intensity(&Picture::new(0, 3)),
            Err(PixwarpError::EmptyImage { .. })
        ));
    }

    // Tests the mean over all pixels
    // Verified by returning zero for empty pictures
    #[test]
    fn test_mean_intensity() {
        let picture = Picture::from_vec(2, 1, vec![0.2, 0.4]).expect("valid picture");
        let mean = mean_intensity(&picture).expect("non-empty picture");
        assert!((mean - 0.3).abs() < 1e-6);
        assert_eq!(mean_intensity(&Picture::new(0, 0)), None);
    }
}
