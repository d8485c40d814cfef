//! Fixtures shared by the unit tests: synthetic frames and tiny MPEG-4 clips.

use std::path::Path;

use crate::shared::frame::{Frame, CHANNELS};

/// Saturated green that lands near hue 50 and survives YUV round trips.
pub const BALL_GREEN: [u8; 3] = [100, 220, 40];
pub const WHITE: [u8; 3] = [255, 255, 255];

/// A solid background with one filled disc of `color`.
pub fn disc_frame(
    width: u32,
    height: u32,
    center: (i32, i32),
    radius: i32,
    color: [u8; 3],
    background: [u8; 3],
    index: usize,
) -> Frame {
    let mut frame = Frame::filled(width, height, background, index);
    let r2 = radius * radius;
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let (dx, dy) = (x - center.0, y - center.1);
            if dx * dx + dy * dy <= r2 {
                frame.put_pixel(x, y, color);
            }
        }
    }
    frame
}

/// Writes `frames` as an MPEG-4 clip that `FfmpegReader` can decode.
pub fn create_test_video(path: &Path, frames: &[Frame], fps: i32) {
    write_clip(
        path,
        frames,
        fps,
        ffmpeg_next::codec::Id::MPEG4,
        ffmpeg_next::format::Pixel::YUV420P,
    );
}

/// Writes `frames` as one PNG image per packet. Use a `.mov` path.
///
/// Each packet starts with the PNG signature, so a single frame can be
/// damaged in place with [`damage_png_frame`].
pub fn create_lossless_video(path: &Path, frames: &[Frame], fps: i32) {
    write_clip(
        path,
        frames,
        fps,
        ffmpeg_next::codec::Id::PNG,
        ffmpeg_next::format::Pixel::RGB24,
    );
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Zeroes the PNG signature of frame `index` inside a clip written by
/// [`create_lossless_video`]. The decoder rejects that packet as invalid
/// data while the container stays readable.
pub fn damage_png_frame(path: &Path, index: usize) {
    let mut bytes = std::fs::read(path).unwrap();
    let starts: Vec<usize> = bytes
        .windows(PNG_SIGNATURE.len())
        .enumerate()
        .filter(|(_, w)| *w == PNG_SIGNATURE)
        .map(|(i, _)| i)
        .collect();
    let start = starts[index];
    bytes[start..start + PNG_SIGNATURE.len()].fill(0);
    std::fs::write(path, bytes).unwrap();
}

fn write_clip(
    path: &Path,
    frames: &[Frame],
    fps: i32,
    codec_id: ffmpeg_next::codec::Id,
    pixel: ffmpeg_next::format::Pixel,
) {
    ffmpeg_next::init().unwrap();

    let width = frames[0].width();
    let height = frames[0].height();
    let mut octx = ffmpeg_next::format::output(path).unwrap();

    let global_header = octx
        .format()
        .flags()
        .contains(ffmpeg_next::format::Flags::GLOBAL_HEADER);

    let codec = ffmpeg_next::encoder::find(codec_id).unwrap();
    let mut ost = octx.add_stream(Some(codec)).unwrap();

    let mut encoder_ctx = ffmpeg_next::codec::context::Context::new_with_codec(codec)
        .encoder()
        .video()
        .unwrap();

    encoder_ctx.set_width(width);
    encoder_ctx.set_height(height);
    encoder_ctx.set_format(pixel);
    encoder_ctx.set_time_base(ffmpeg_next::Rational(1, fps));
    encoder_ctx.set_frame_rate(Some(ffmpeg_next::Rational(fps, 1)));
    // Keep colors close to the source so hue thresholds still match.
    encoder_ctx.set_bit_rate(4_000_000);

    if global_header {
        encoder_ctx.set_flags(ffmpeg_next::codec::Flags::GLOBAL_HEADER);
    }

    let mut encoder = encoder_ctx
        .open_with(ffmpeg_next::Dictionary::new())
        .unwrap();
    ost.set_parameters(&encoder);

    octx.write_header().unwrap();

    let ost_time_base = octx.stream(0).unwrap().time_base();

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        ffmpeg_next::format::Pixel::RGB24,
        width,
        height,
        pixel,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .unwrap();

    let row_len = width as usize * CHANNELS;
    for (i, frame) in frames.iter().enumerate() {
        let mut rgb_frame = ffmpeg_next::util::frame::video::Video::new(
            ffmpeg_next::format::Pixel::RGB24,
            width,
            height,
        );
        let stride = rgb_frame.stride(0);
        let data = rgb_frame.data_mut(0);
        for (row, src) in frame.data().chunks_exact(row_len).enumerate() {
            data[row * stride..row * stride + row_len].copy_from_slice(src);
        }

        let mut converted = ffmpeg_next::util::frame::video::Video::empty();
        scaler.run(&rgb_frame, &mut converted).unwrap();
        converted.set_pts(Some(i as i64));

        encoder.send_frame(&converted).unwrap();

        let mut encoded = ffmpeg_next::Packet::empty();
        while encoder.receive_packet(&mut encoded).is_ok() {
            encoded.set_stream(0);
            encoded.rescale_ts(ffmpeg_next::Rational(1, fps), ost_time_base);
            encoded.write_interleaved(&mut octx).unwrap();
        }
    }

    encoder.send_eof().unwrap();
    let mut encoded = ffmpeg_next::Packet::empty();
    while encoder.receive_packet(&mut encoded).is_ok() {
        encoded.set_stream(0);
        encoded.rescale_ts(ffmpeg_next::Rational(1, fps), ost_time_base);
        encoded.write_interleaved(&mut octx).unwrap();
    }

    octx.write_trailer().unwrap();
}

/// `count` frames of a green ball moving left to right across a white field.
pub fn moving_ball_frames(count: usize, width: u32, height: u32) -> Vec<Frame> {
    (0..count)
        .map(|i| {
            let x = 30 + (i as i32 * 10);
            disc_frame(width, height, (x, height as i32 / 2), 16, BALL_GREEN, WHITE, i)
        })
        .collect()
}
