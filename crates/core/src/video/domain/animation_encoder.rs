use crate::shared::frame::Frame;
use crate::shared::track_error::TrackError;

/// Encodes a finished frame sequence into one animated image in memory.
///
/// Every frame is shown for `frame_delay_ms`. Implementations reject an
/// empty sequence with [`TrackError::EmptySequence`] before producing any
/// bytes.
pub trait AnimationEncoder: Send {
    fn encode(&self, frames: &[Frame], frame_delay_ms: u32) -> Result<Vec<u8>, TrackError>;
}
