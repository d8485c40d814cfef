/// Lower HSV bound of the tracked green ball (8-bit HSV, hue halved into 0-179).
pub const GREEN_LOWER: [u8; 3] = [29, 86, 6];
/// Upper HSV bound of the tracked green ball.
pub const GREEN_UPPER: [u8; 3] = [64, 255, 255];

/// Frames are scaled to this width before segmentation.
pub const WORKING_WIDTH: u32 = 400;

/// Maximum number of centers kept in the trail.
pub const TRAIL_CAPACITY: usize = 64;

/// Detections with an enclosing radius at or below this are not annotated.
pub const MIN_RADIUS: f64 = 10.0;

pub const BLUR_KERNEL_SIZE: usize = 11;
pub const MORPH_ITERATIONS: usize = 2;

/// Display time of each frame in the output animation.
pub const FRAME_DELAY_MS: u32 = 40;

pub const DEFAULT_OUTPUT_PATH: &str = "newblob/test.gif";

/// Returned to the trigger host after a successful invocation.
pub const SUCCESS_MARKER: &str = "ok";

/// Annotation colors, RGB.
pub const CIRCLE_COLOR: [u8; 3] = [255, 255, 0];
pub const TRAIL_COLOR: [u8; 3] = [255, 0, 0];

pub const CIRCLE_THICKNESS: i32 = 2;
pub const CENTER_MARKER_RADIUS: i32 = 5;
