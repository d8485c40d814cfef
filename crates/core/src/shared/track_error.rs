use std::path::PathBuf;

use thiserror::Error;

use crate::shared::track_config::ConfigError;

/// Failures that reach the trigger host.
///
/// Decode errors mid-stream and degenerate contours are handled inside the
/// pipeline and never surface here. A failing vision stage aborts the run.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("no frames were decoded, nothing to encode")]
    EmptySequence,
    #[error("failed to open video {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error>,
    },
    #[error("{stage} stage failed on frame {frame}: {source}")]
    Vision {
        stage: &'static str,
        frame: usize,
        #[source]
        source: Box<dyn std::error::Error>,
    },
    #[error("failed to encode animation: {0}")]
    Encode(#[from] image::ImageError),
    #[error("blob I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
