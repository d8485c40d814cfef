use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::segmentation::domain::hsv_range::HsvRange;
use crate::shared::constants::{
    BLUR_KERNEL_SIZE, FRAME_DELAY_MS, GREEN_LOWER, GREEN_UPPER, MIN_RADIUS, MORPH_ITERATIONS,
    TRAIL_CAPACITY, WORKING_WIDTH,
};

const MAX_HUE: u8 = 179;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lower bound {lower} exceeds upper bound {upper} on channel {channel}")]
    InvertedBounds { channel: usize, lower: u8, upper: u8 },
    #[error("hue bound {0} is outside 0-179")]
    HueOutOfRange(u8),
    #[error("working width must be positive")]
    ZeroWidth,
    #[error("trail capacity must be positive")]
    ZeroCapacity,
    #[error("blur kernel size must be a positive odd integer, got {0}")]
    InvalidKernel(usize),
    #[error("minimum radius must be a finite non-negative number, got {0}")]
    InvalidMinRadius(f64),
    #[error("frame delay must be positive")]
    ZeroFrameDelay,
}

/// Immutable parameters for one tracking run.
///
/// Missing JSON fields fall back to the built-in green-ball defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackConfig {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
    pub working_width: u32,
    pub trail_capacity: usize,
    pub min_radius: f64,
    pub blur_kernel_size: usize,
    pub morph_iterations: usize,
    pub frame_delay_ms: u32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            lower: GREEN_LOWER,
            upper: GREEN_UPPER,
            working_width: WORKING_WIDTH,
            trail_capacity: TRAIL_CAPACITY,
            min_radius: MIN_RADIUS,
            blur_kernel_size: BLUR_KERNEL_SIZE,
            morph_iterations: MORPH_ITERATIONS,
            frame_delay_ms: FRAME_DELAY_MS,
        }
    }
}

impl TrackConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for channel in 0..3 {
            if self.lower[channel] > self.upper[channel] {
                return Err(ConfigError::InvertedBounds {
                    channel,
                    lower: self.lower[channel],
                    upper: self.upper[channel],
                });
            }
        }
        if self.upper[0] > MAX_HUE {
            return Err(ConfigError::HueOutOfRange(self.upper[0]));
        }
        if self.working_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.blur_kernel_size == 0 || self.blur_kernel_size % 2 == 0 {
            return Err(ConfigError::InvalidKernel(self.blur_kernel_size));
        }
        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(ConfigError::InvalidMinRadius(self.min_radius));
        }
        if self.frame_delay_ms == 0 {
            return Err(ConfigError::ZeroFrameDelay);
        }
        Ok(())
    }

    pub fn hsv_range(&self) -> HsvRange {
        HsvRange::new(self.lower, self.upper)
    }
}
