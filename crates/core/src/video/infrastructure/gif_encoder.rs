use image::codecs::gif::{GifEncoder, Repeat};
use image::Delay;

use crate::shared::frame::Frame;
use crate::shared::track_error::TrackError;
use crate::video::domain::animation_encoder::AnimationEncoder;

/// Palette quantization speed (1 = best quality, 30 = fastest).
const QUANTIZER_SPEED: i32 = 10;

/// Encodes frames as an endlessly looping GIF using the `image` crate.
#[derive(Default)]
pub struct GifAnimationEncoder;

impl GifAnimationEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl AnimationEncoder for GifAnimationEncoder {
    fn encode(&self, frames: &[Frame], frame_delay_ms: u32) -> Result<Vec<u8>, TrackError> {
        if frames.is_empty() {
            return Err(TrackError::EmptySequence);
        }

        let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
        let mut bytes = Vec::new();
        {
            // The trailer is written when the encoder drops.
            let mut encoder = GifEncoder::new_with_speed(&mut bytes, QUANTIZER_SPEED);
            encoder.set_repeat(Repeat::Infinite)?;
            for frame in frames {
                let rgba = frame.to_rgba_image();
                encoder.encode_frame(image::Frame::from_parts(rgba, 0, 0, delay))?;
            }
        }
        Ok(bytes)
    }
}
