use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

pub type FrameResult = Result<Frame, Box<dyn std::error::Error>>;

/// Lazily decodes RGB frames from a video container.
///
/// The pipeline stops at the first `None` or `Err` from [`frames`], so an
/// implementation may yield a decode error and then keep going; nothing
/// after it will be read.
///
/// [`frames`]: VideoReader::frames
pub trait VideoReader: Send {
    /// Opens the container and returns its metadata.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Frames in decode order. Yields a single error when not opened.
    fn frames(&mut self) -> Box<dyn Iterator<Item = FrameResult> + '_>;

    /// Releases the decoder and demuxer. Safe to call more than once.
    fn close(&mut self);
}
