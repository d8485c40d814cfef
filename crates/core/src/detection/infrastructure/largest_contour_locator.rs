use opencv::core::{self, Point2f, Vector};
use opencv::imgproc;

use crate::detection::domain::circle::Circle;
use crate::detection::domain::detection::Detection;
use crate::detection::domain::object_locator::ObjectLocator;
use crate::segmentation::domain::mask::Mask;
use crate::shared::cv_mat::mask_to_mat;
use crate::shared::point::Point;

type Contour = Vector<core::Point>;

/// Picks the external contour with the largest area and reports its
/// enclosing circle and moment centroid.
///
/// A contour whose area moment is zero has no centroid; the frame is then
/// reported as having no detection instead of failing.
pub struct LargestContourLocator;

impl LargestContourLocator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LargestContourLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectLocator for LargestContourLocator {
    fn locate(&self, mask: &Mask) -> Result<Option<Detection>, Box<dyn std::error::Error>> {
        let mut image = mask_to_mat(mask)?;
        let mut contours = Vector::<Contour>::new();
        imgproc::find_contours(
            &mut image,
            &mut contours,
            imgproc::RETR_EXTERNAL,
            imgproc::CHAIN_APPROX_SIMPLE,
            core::Point::new(0, 0),
        )?;

        let Some(best) = largest(&contours)? else {
            return Ok(None);
        };

        let mut center = Point2f::new(0.0, 0.0);
        let mut radius = 0.0f32;
        imgproc::min_enclosing_circle(&best, &mut center, &mut radius)?;

        let m = imgproc::moments(&best, false)?;
        if m.m00 == 0.0 {
            log::debug!(
                "Largest of {} contours has zero area moment ({} points), no centroid",
                contours.len(),
                best.len()
            );
            return Ok(None);
        }

        Ok(Some(Detection {
            center: Point::new((m.m10 / m.m00) as i32, (m.m01 / m.m00) as i32),
            circle: Circle {
                center_x: center.x as f64,
                center_y: center.y as f64,
                radius: radius as f64,
            },
        }))
    }
}

/// Strict maximum by `contour_area`: on ties the earlier contour wins.
fn largest(contours: &Vector<Contour>) -> opencv::Result<Option<Contour>> {
    let mut best: Option<(Contour, f64)> = None;
    for contour in contours.iter() {
        let area = imgproc::contour_area(&contour, false)?;
        if best.as_ref().map_or(true, |(_, best_area)| area > *best_area) {
            best = Some((contour, area));
        }
    }
    Ok(best.map(|(contour, _)| contour))
}
