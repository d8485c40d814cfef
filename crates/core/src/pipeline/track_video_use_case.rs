use std::path::Path;
use std::time::Instant;

use crate::shared::point::Point;
use crate::shared::track_config::TrackConfig;
use crate::shared::track_error::TrackError;
use crate::video::domain::animation_encoder::AnimationEncoder;
use crate::video::domain::video_reader::VideoReader;

use super::frame_track_accumulator::FrameTrackAccumulator;
use super::pipeline_logger::PipelineLogger;

/// Result of one tracking run.
#[derive(Debug)]
pub struct TrackReport {
    /// The encoded animation, one frame per decoded input frame.
    pub animation: Vec<u8>,
    /// Detected center per input frame, in decode order.
    pub centers: Vec<Option<Point>>,
}

impl TrackReport {
    pub fn frame_count(&self) -> usize {
        self.centers.len()
    }
}

/// Video tracking pipeline: decode → accumulate → encode.
///
/// The reader is closed on every exit path once it has been opened. The
/// encoder is driven with the configured frame delay.
pub struct TrackVideoUseCase {
    config: TrackConfig,
    reader: Box<dyn VideoReader>,
    encoder: Box<dyn AnimationEncoder>,
    logger: Box<dyn PipelineLogger>,
    build_accumulator: fn(&TrackConfig) -> FrameTrackAccumulator,
}

impl TrackVideoUseCase {
    pub fn new(
        config: TrackConfig,
        reader: Box<dyn VideoReader>,
        encoder: Box<dyn AnimationEncoder>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            config,
            reader,
            encoder,
            logger,
            build_accumulator: FrameTrackAccumulator::from_config,
        }
    }

    /// Replaces how the per-run accumulator is wired from the config.
    pub fn with_accumulator(mut self, build: fn(&TrackConfig) -> FrameTrackAccumulator) -> Self {
        self.build_accumulator = build;
        self
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    pub fn execute(&mut self, input_path: &Path) -> Result<TrackReport, TrackError> {
        self.config.validate()?;

        let metadata = self
            .reader
            .open(input_path)
            .map_err(|source| TrackError::Open {
                path: input_path.to_path_buf(),
                source,
            })?;
        let mut guard = CloseOnDrop {
            reader: self.reader.as_mut(),
        };

        log::debug!(
            "Opened {}x{} {} video at {:.2} fps ({} frames reported)",
            metadata.width,
            metadata.height,
            metadata.codec,
            metadata.fps,
            metadata.total_frames
        );

        let mut accumulator = (self.build_accumulator)(&self.config);
        let mut centers = Vec::new();

        for (i, result) in guard.reader.frames().enumerate() {
            let frame = match result {
                Ok(frame) => frame,
                Err(e) => {
                    log::warn!("Decode error after {i} frames, treating as end of stream: {e}");
                    break;
                }
            };
            let detection = accumulator.step(frame, self.logger.as_mut())?;
            centers.push(detection.map(|d| d.center));
            self.logger.progress(i + 1, metadata.total_frames);
        }
        drop(guard);

        let found = centers.iter().filter(|c| c.is_some()).count();
        self.logger.info(&format!(
            "Tracked {} frames, object found in {found}",
            centers.len()
        ));

        let frames = accumulator.finish()?;

        let t0 = Instant::now();
        let animation = self
            .encoder
            .encode(&frames, self.config.frame_delay_ms)?;
        self.logger
            .timing("encode", t0.elapsed().as_secs_f64() * 1000.0);
        self.logger.summary();

        Ok(TrackReport { animation, centers })
    }
}

/// Closes the reader when dropped, so early returns and panics release it.
struct CloseOnDrop<'a> {
    reader: &'a mut dyn VideoReader,
}

impl Drop for CloseOnDrop<'_> {
    fn drop(&mut self) {
        self.reader.close();
    }
}
