use crate::shared::point::Point;

use super::circle::Circle;

/// Best candidate for the tracked object in one frame.
///
/// `center` is the moment centroid; `circle` the minimum enclosing circle of
/// the same contour. The two centers usually differ by a pixel or two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub center: Point,
    pub circle: Circle,
}

impl Detection {
    pub fn radius(&self) -> f64 {
        self.circle.radius
    }
}
