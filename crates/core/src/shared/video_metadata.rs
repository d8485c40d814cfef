use std::path::PathBuf;

/// Container-level facts about a video, read before decoding starts.
///
/// `total_frames` is the container's estimate and is 0 when the format
/// does not report one; the pipeline never relies on it for termination.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}
