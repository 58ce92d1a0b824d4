/// An axis-aligned detection rectangle in pixel coordinates.
///
/// Detections carry no identity across frames; a `Region` lives for one
/// loop iteration. Eye detections come back relative to their face's
/// sub-region and must be lifted via [`Region::translate`] before they
/// are frame-global.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shifts the region by an origin, e.g. from face-local to
    /// frame-global coordinates.
    pub fn translate(&self, dx: i32, dy: i32) -> Region {
        Region {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Whether `other` lies entirely within this region.
    pub fn contains(&self, other: &Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ── Translation ──────────────────────────────────────────────────

    #[test]
    fn test_translate_shifts_origin_only() {
        let r = Region::new(5, 8, 20, 10);
        let moved = r.translate(100, 50);
        assert_eq!(moved, Region::new(105, 58, 20, 10));
    }

    #[test]
    fn test_translate_zero_is_identity() {
        let r = Region::new(3, 4, 5, 6);
        assert_eq!(r.translate(0, 0), r);
    }

    #[test]
    fn test_translate_lifts_face_local_eye_into_face_bounds() {
        // An eye found at (5, 5) inside a 40x40 face at (20, 30) lands
        // inside that face once lifted to frame coordinates.
        let face = Region::new(20, 30, 40, 40);
        let eye_local = Region::new(5, 5, 10, 10);
        let eye = eye_local.translate(face.x, face.y);
        assert_eq!(eye, Region::new(25, 35, 10, 10));
        assert!(face.contains(&eye));
    }

    // ── Containment ──────────────────────────────────────────────────

    #[rstest]
    #[case::identical(Region::new(0, 0, 50, 50), true)]
    #[case::strictly_inside(Region::new(10, 10, 20, 20), true)]
    #[case::touching_edges(Region::new(0, 0, 50, 25), true)]
    #[case::overhangs_right(Region::new(40, 0, 20, 20), false)]
    #[case::overhangs_bottom(Region::new(0, 40, 20, 20), false)]
    #[case::outside(Region::new(60, 60, 10, 10), false)]
    #[case::starts_before_origin(Region::new(-1, 0, 10, 10), false)]
    fn test_contains(#[case] inner: Region, #[case] expected: bool) {
        let outer = Region::new(0, 0, 50, 50);
        assert_eq!(outer.contains(&inner), expected);
    }

    #[test]
    fn test_area() {
        assert_eq!(Region::new(0, 0, 60, 40).area(), 2400);
        assert_eq!(Region::new(10, 10, 0, 40).area(), 0);
    }
}
