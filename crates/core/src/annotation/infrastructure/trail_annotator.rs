use opencv::core::{self, Mat, Scalar};
use opencv::imgproc;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::detection::domain::detection::Detection;
use crate::shared::constants::{
    CENTER_MARKER_RADIUS, CIRCLE_COLOR, CIRCLE_THICKNESS, TRAIL_COLOR,
};
use crate::shared::cv_mat::{frame_to_mat, mat_to_frame};
use crate::shared::frame::Frame;
use crate::shared::point::Point;
use crate::tracking::domain::trail::Trail;

/// Draws the enclosing circle, a filled center dot and the tapering trail
/// with `imgproc` primitives.
pub struct TrailAnnotator {
    circle_color: Scalar,
    trail_color: Scalar,
}

impl TrailAnnotator {
    pub fn new(circle_color: [u8; 3], trail_color: [u8; 3]) -> Self {
        Self {
            circle_color: rgb_scalar(circle_color),
            trail_color: rgb_scalar(trail_color),
        }
    }

    fn draw(
        &self,
        canvas: &mut Mat,
        detection: Option<&Detection>,
        trail: &Trail,
    ) -> opencv::Result<()> {
        if let Some(d) = detection {
            let (center, radius) = d.circle.to_pixels();
            imgproc::circle(
                canvas,
                cv_point(center),
                radius,
                self.circle_color,
                CIRCLE_THICKNESS,
                imgproc::LINE_8,
                0,
            )?;
            imgproc::circle(
                canvas,
                cv_point(d.center),
                CENTER_MARKER_RADIUS,
                self.trail_color,
                imgproc::FILLED,
                imgproc::LINE_8,
                0,
            )?;
        }

        for (i, newer, older) in trail.segments() {
            imgproc::line(
                canvas,
                cv_point(newer),
                cv_point(older),
                self.trail_color,
                trail.thickness(i),
                imgproc::LINE_8,
                0,
            )?;
        }
        Ok(())
    }
}

impl Default for TrailAnnotator {
    fn default() -> Self {
        Self::new(CIRCLE_COLOR, TRAIL_COLOR)
    }
}

impl FrameAnnotator for TrailAnnotator {
    fn annotate(
        &self,
        frame: &mut Frame,
        detection: Option<&Detection>,
        trail: &Trail,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if detection.is_none() && trail.segments().next().is_none() {
            return Ok(());
        }

        let mut canvas = frame_to_mat(frame)?;
        self.draw(&mut canvas, detection, trail)?;
        *frame = mat_to_frame(&canvas, frame.index())?;
        Ok(())
    }
}

/// The canvas holds RGB, so channels map straight across.
fn rgb_scalar(rgb: [u8; 3]) -> Scalar {
    Scalar::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64, 0.0)
}

fn cv_point(p: Point) -> core::Point {
    core::Point::new(p.x, p.y)
}
