use crate::segmentation::domain::mask::Mask;
use crate::shared::frame::Frame;

/// Domain interface for turning a working-size frame into a target mask.
pub trait FrameSegmenter: Send {
    fn segment(&self, frame: &Frame) -> Result<Mask, Box<dyn std::error::Error>>;
}
