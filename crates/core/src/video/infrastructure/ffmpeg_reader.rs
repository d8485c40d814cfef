use std::path::Path;

use crate::shared::frame::{Frame, CHANNELS};
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::{FrameResult, VideoReader};

/// Decodes video frames via ffmpeg-next (libavformat + libavcodec).
///
/// Every decoded frame is converted to RGB24 here, so downstream stages
/// never see the codec's native pixel format.
pub struct FfmpegReader {
    input_ctx: Option<ffmpeg_next::format::context::Input>,
    video_stream_index: usize,
    metadata: Option<VideoMetadata>,
}

// Safety: FfmpegReader is only used from a single thread at a time.
// The raw pointers inside ffmpeg types are not shared across threads.
unsafe impl Send for FfmpegReader {}

impl FfmpegReader {
    pub fn new() -> Self {
        Self {
            input_ctx: None,
            video_stream_index: 0,
            metadata: None,
        }
    }
}

impl Default for FfmpegReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoReader for FfmpegReader {
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let ictx = ffmpeg_next::format::input(path)?;

        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or("No video stream found")?;

        let video_stream_index = stream.index();
        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())?;
        let decoder = codec_ctx.decoder().video()?;

        let rate = stream.rate();
        let fps = if rate.denominator() != 0 {
            rate.numerator() as f64 / rate.denominator() as f64
        } else {
            0.0
        };

        let metadata = VideoMetadata {
            width: decoder.width(),
            height: decoder.height(),
            fps,
            total_frames: stream.frames() as usize,
            codec: decoder
                .codec()
                .map(|c| c.name().to_string())
                .unwrap_or_default(),
            source_path: Some(path.to_path_buf()),
        };

        self.video_stream_index = video_stream_index;
        self.metadata = Some(metadata.clone());
        self.input_ctx = Some(ictx);

        Ok(metadata)
    }

    fn frames(&mut self) -> Box<dyn Iterator<Item = FrameResult> + '_> {
        let video_stream_index = self.video_stream_index;
        let Some(ictx) = self.input_ctx.as_mut() else {
            return Box::new(std::iter::once(Err("FfmpegReader: not opened".into())));
        };

        match FfmpegFrameIter::new(ictx, video_stream_index) {
            Ok(iter) => Box::new(iter),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }

    fn close(&mut self) {
        self.input_ctx = None;
        self.metadata = None;
    }
}

/// What the decoder said when asked for its next picture.
#[derive(Debug, PartialEq)]
enum Pull {
    Ready,
    NeedsInput,
    Drained,
    Failed(ffmpeg_next::Error),
}

impl From<Result<(), ffmpeg_next::Error>> for Pull {
    fn from(result: Result<(), ffmpeg_next::Error>) -> Self {
        match result {
            Ok(()) => Pull::Ready,
            Err(ffmpeg_next::Error::Other { errno }) if errno == ffmpeg_next::error::EAGAIN => {
                Pull::NeedsInput
            }
            Err(ffmpeg_next::Error::Eof) => Pull::Drained,
            Err(e) => Pull::Failed(e),
        }
    }
}

/// Pulls packets from the demuxer on demand and yields RGB frames one at a
/// time. The first demux, decode or conversion failure is yielded as an
/// `Err` and ends the sequence.
struct FfmpegFrameIter<'a> {
    ictx: &'a mut ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    width: u32,
    height: u32,
    video_stream_index: usize,
    next_index: usize,
    input_exhausted: bool,
    finished: bool,
}

impl<'a> FfmpegFrameIter<'a> {
    fn new(
        ictx: &'a mut ffmpeg_next::format::context::Input,
        video_stream_index: usize,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let stream = ictx
            .stream(video_stream_index)
            .ok_or("Video stream disappeared after open")?;
        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())?;
        let decoder = codec_ctx.decoder().video()?;

        let width = decoder.width();
        let height = decoder.height();

        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGB24,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )?;

        Ok(Self {
            ictx,
            decoder,
            scaler,
            width,
            height,
            video_stream_index,
            next_index: 0,
            input_exhausted: false,
            finished: false,
        })
    }

    /// Hands the decoder the next packet of the video stream, or the end of
    /// input once the demuxer runs dry.
    fn feed(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            let mut packet = ffmpeg_next::Packet::empty();
            match packet.read(self.ictx) {
                Ok(()) if packet.stream() != self.video_stream_index => continue,
                Ok(()) => {
                    return self.decoder.send_packet(&packet).map_err(|e| {
                        format!("rejected packet after frame {}: {e}", self.next_index).into()
                    });
                }
                Err(ffmpeg_next::Error::Eof) => {
                    self.input_exhausted = true;
                    return Ok(self.decoder.send_eof()?);
                }
                Err(e) => {
                    return Err(format!("demux failed after frame {}: {e}", self.next_index).into())
                }
            }
        }
    }

    fn convert(&mut self, decoded: &ffmpeg_next::util::frame::video::Video) -> FrameResult {
        let mut rgb = ffmpeg_next::util::frame::video::Video::empty();
        self.scaler.run(decoded, &mut rgb)?;

        let frame = Frame::new(
            packed_rows(&rgb, self.width, self.height),
            self.width,
            self.height,
            self.next_index,
        );
        self.next_index += 1;
        Ok(frame)
    }

    fn fail(&mut self, err: Box<dyn std::error::Error>) -> Option<FrameResult> {
        self.finished = true;
        Some(Err(err))
    }
}

impl Iterator for FfmpegFrameIter<'_> {
    type Item = FrameResult;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let mut decoded = ffmpeg_next::util::frame::video::Video::empty();
            match Pull::from(self.decoder.receive_frame(&mut decoded)) {
                Pull::Ready => {
                    return match self.convert(&decoded) {
                        Ok(frame) => Some(Ok(frame)),
                        Err(e) => self.fail(e),
                    };
                }
                Pull::Drained => self.finished = true,
                Pull::NeedsInput if self.input_exhausted => self.finished = true,
                Pull::NeedsInput => {
                    if let Err(e) = self.feed() {
                        return self.fail(e);
                    }
                }
                Pull::Failed(e) => {
                    let message = format!("decode failed after frame {}: {e}", self.next_index);
                    return self.fail(message.into());
                }
            }
        }
        None
    }
}

/// Row-by-row copy of the RGB plane without the stride padding ffmpeg may
/// put after each row.
fn packed_rows(rgb: &ffmpeg_next::util::frame::video::Video, width: u32, height: u32) -> Vec<u8> {
    let row_len = width as usize * CHANNELS;
    rgb.data(0)
        .chunks(rgb.stride(0))
        .take(height as usize)
        .flat_map(|row| &row[..row_len])
        .copied()
        .collect()
}
