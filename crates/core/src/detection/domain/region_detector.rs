use opencv::core::Mat;

use crate::shared::region::Region;

/// Tuning for a single multi-scale detection pass.
///
/// `scale_factor` is the per-pass shrink of the search window (1.1 =
/// ~10% steps). `min_neighbors` is how many overlapping candidates a
/// rectangle needs before it is retained; eyes use a stricter value than
/// faces because they are smaller, lower-contrast features with more
/// false positives. `min_size` rejects detections below that size as
/// noise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectParams {
    pub scale_factor: f64,
    pub min_neighbors: i32,
    pub min_size: (i32, i32),
}

impl DetectParams {
    /// Frontal-face tuning used by the preview loop.
    pub fn faces() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 5,
            min_size: (60, 60),
        }
    }

    /// Eye tuning for searches restricted to a face sub-region.
    pub fn eyes() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 10,
            min_size: (20, 20),
        }
    }
}

/// Domain interface over an opaque trained detector: rectangles in an
/// intensity image, given tuning parameters. The detection algorithm
/// itself is not this crate's concern.
///
/// `image` must be single-channel. Returned regions are in `image`'s
/// own coordinate space; callers searching a sub-region translate them
/// afterwards. Implementations return an empty vector, not an error,
/// when nothing is found.
pub trait RegionDetector: Send {
    fn detect(
        &mut self,
        image: &Mat,
        params: &DetectParams,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_face_defaults() {
        let p = DetectParams::faces();
        assert_relative_eq!(p.scale_factor, 1.1);
        assert_eq!(p.min_neighbors, 5);
        assert_eq!(p.min_size, (60, 60));
    }

    #[test]
    fn test_eye_defaults_are_stricter_and_smaller() {
        let faces = DetectParams::faces();
        let eyes = DetectParams::eyes();
        assert_relative_eq!(eyes.scale_factor, 1.1);
        assert_eq!(eyes.min_neighbors, 10);
        assert_eq!(eyes.min_size, (20, 20));
        assert!(eyes.min_neighbors > faces.min_neighbors);
        assert!(eyes.min_size.0 < faces.min_size.0);
    }
}
