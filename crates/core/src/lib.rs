//! Colored-ball trail tracking: decode a video, follow the largest in-range
//! blob frame by frame, draw its trail and re-encode the result as a GIF.

pub mod annotation;
pub mod detection;
pub mod pipeline;
pub mod segmentation;
pub mod shared;
pub mod tracking;
pub mod trigger;
pub mod video;

#[cfg(test)]
mod test_support;
