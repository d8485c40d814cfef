use crate::detection::domain::detection::Detection;
use crate::shared::frame::Frame;
use crate::tracking::domain::trail::Trail;

/// Domain interface for drawing tracking results onto a frame in place.
///
/// `detection` is `None` when nothing should be marked this frame, either
/// because nothing was found or because it was too small. The trail is
/// drawn regardless.
pub trait FrameAnnotator: Send {
    fn annotate(
        &self,
        frame: &mut Frame,
        detection: Option<&Detection>,
        trail: &Trail,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
