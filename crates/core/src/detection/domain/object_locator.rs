use crate::detection::domain::detection::Detection;
use crate::segmentation::domain::mask::Mask;

/// Domain interface for picking the tracked object out of a mask.
///
/// `Ok(None)` when nothing qualifies this frame.
pub trait ObjectLocator: Send {
    fn locate(&self, mask: &Mask) -> Result<Option<Detection>, Box<dyn std::error::Error>>;
}
