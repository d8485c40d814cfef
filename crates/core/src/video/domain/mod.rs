pub mod animation_encoder;
pub mod video_reader;
