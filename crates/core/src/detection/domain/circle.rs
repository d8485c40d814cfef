use crate::shared::point::Point;

/// Circle in working-image pixel space, as reported by the enclosing-circle
/// fit. Sub-pixel values are kept until drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Circle {
    /// Center and radius truncated to whole pixels for drawing.
    pub fn to_pixels(&self) -> (Point, i32) {
        (
            Point::new(self.center_x as i32, self.center_y as i32),
            self.radius as i32,
        )
    }
}
