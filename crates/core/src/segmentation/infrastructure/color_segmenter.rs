use opencv::core::{self, Mat, Point, Scalar, Size, BORDER_CONSTANT, BORDER_DEFAULT};
use opencv::imgproc;
use opencv::prelude::*;

use crate::segmentation::domain::frame_segmenter::FrameSegmenter;
use crate::segmentation::domain::hsv_range::HsvRange;
use crate::segmentation::domain::mask::Mask;
use crate::shared::cv_mat::{frame_to_mat, mat_to_mask};
use crate::shared::frame::Frame;

/// Blur → HSV → range threshold → erode/dilate, all through `imgproc`.
pub struct ColorSegmenter {
    lower: Scalar,
    upper: Scalar,
    blur_size: Size,
    morph_iterations: i32,
}

impl ColorSegmenter {
    pub fn new(range: HsvRange, blur_kernel_size: usize, morph_iterations: usize) -> Self {
        let side = blur_kernel_size as i32;
        Self {
            lower: hsv_scalar(range.lower),
            upper: hsv_scalar(range.upper),
            blur_size: Size::new(side, side),
            morph_iterations: morph_iterations as i32,
        }
    }

    fn threshold(&self, frame: &Frame) -> opencv::Result<Mat> {
        let rgb = frame_to_mat(frame)?;

        let mut blurred = Mat::default();
        imgproc::gaussian_blur(&rgb, &mut blurred, self.blur_size, 0.0, 0.0, BORDER_DEFAULT)?;

        let mut hsv = Mat::default();
        imgproc::cvt_color(&blurred, &mut hsv, imgproc::COLOR_RGB2HSV, 0)?;

        let mut mask = Mat::default();
        core::in_range(&hsv, &self.lower, &self.upper, &mut mask)?;

        self.open(&mask)
    }

    /// Erosion then dilation with a 3×3 square, each repeated
    /// `morph_iterations` times. Zero iterations leaves the mask as is.
    fn open(&self, mask: &Mat) -> opencv::Result<Mat> {
        let kernel = imgproc::get_structuring_element(
            imgproc::MORPH_RECT,
            Size::new(3, 3),
            Point::new(-1, -1),
        )?;
        let border = imgproc::morphology_default_border_value()?;

        let mut eroded = Mat::default();
        imgproc::erode(
            mask,
            &mut eroded,
            &kernel,
            Point::new(-1, -1),
            self.morph_iterations,
            BORDER_CONSTANT,
            border,
        )?;

        let mut opened = Mat::default();
        imgproc::dilate(
            &eroded,
            &mut opened,
            &kernel,
            Point::new(-1, -1),
            self.morph_iterations,
            BORDER_CONSTANT,
            border,
        )?;
        Ok(opened)
    }
}

fn hsv_scalar(hsv: [u8; 3]) -> Scalar {
    Scalar::new(hsv[0] as f64, hsv[1] as f64, hsv[2] as f64, 0.0)
}

impl FrameSegmenter for ColorSegmenter {
    fn segment(&self, frame: &Frame) -> Result<Mask, Box<dyn std::error::Error>> {
        let mask = self.threshold(frame)?;
        Ok(mat_to_mask(&mask)?)
    }
}
