pub mod ffmpeg_reader;
pub mod gif_encoder;
