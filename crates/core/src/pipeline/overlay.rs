use opencv::core::{Mat, Rect, Scalar};
use opencv::imgproc;

use crate::shared::region::Region;

/// Outline colors and stroke width for the annotated preview.
///
/// Colors are BGR, matching OpenCV's channel order for captured frames.
#[derive(Clone, Copy, Debug)]
pub struct OverlayStyle {
    pub face_color: Scalar,
    pub eye_color: Scalar,
    pub thickness: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            face_color: Scalar::new(0.0, 255.0, 0.0, 0.0),
            eye_color: Scalar::new(0.0, 0.0, 255.0, 0.0),
            thickness: 2,
        }
    }
}

/// Draws an unfilled rectangle outline at `region` on `frame`.
pub fn draw_outline(
    frame: &mut Mat,
    region: &Region,
    color: Scalar,
    thickness: i32,
) -> Result<(), opencv::Error> {
    imgproc::rectangle(
        frame,
        to_rect(region),
        color,
        thickness,
        imgproc::LINE_8,
        0,
    )
}

pub fn to_rect(region: &Region) -> Rect {
    Rect::new(region.x, region.y, region.width, region.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{self, CV_8UC3};

    fn black_frame() -> Mat {
        Mat::new_rows_cols_with_default(120, 160, CV_8UC3, Scalar::all(0.0)).unwrap()
    }

    fn pixel_sum(frame: &Mat) -> f64 {
        let s = core::sum_elems(frame).unwrap();
        s[0] + s[1] + s[2]
    }

    #[test]
    fn test_draw_outline_marks_pixels() {
        let mut frame = black_frame();
        let style = OverlayStyle::default();
        draw_outline(
            &mut frame,
            &Region::new(10, 10, 50, 40),
            style.face_color,
            style.thickness,
        )
        .unwrap();
        assert!(pixel_sum(&frame) > 0.0);
    }

    #[test]
    fn test_draw_outline_leaves_interior_unfilled() {
        let mut frame = black_frame();
        let style = OverlayStyle::default();
        draw_outline(
            &mut frame,
            &Region::new(10, 10, 60, 60),
            style.face_color,
            style.thickness,
        )
        .unwrap();

        // Well inside the outline the frame is still black.
        let interior = Mat::roi(&frame, Rect::new(25, 25, 20, 20)).unwrap();
        assert_eq!(pixel_sum(&interior), 0.0);
    }

    #[test]
    fn test_default_style_is_green_face_red_eye() {
        let style = OverlayStyle::default();
        assert_eq!(style.face_color, Scalar::new(0.0, 255.0, 0.0, 0.0));
        assert_eq!(style.eye_color, Scalar::new(0.0, 0.0, 255.0, 0.0));
        assert_eq!(style.thickness, 2);
    }

    #[test]
    fn test_to_rect() {
        let r = to_rect(&Region::new(1, 2, 3, 4));
        assert_eq!((r.x, r.y, r.width, r.height), (1, 2, 3, 4));
    }
}
