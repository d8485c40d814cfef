use std::time::Instant;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::annotation::infrastructure::trail_annotator::TrailAnnotator;
use crate::detection::domain::detection::Detection;
use crate::detection::domain::object_locator::ObjectLocator;
use crate::detection::infrastructure::largest_contour_locator::LargestContourLocator;
use crate::segmentation::domain::frame_segmenter::FrameSegmenter;
use crate::segmentation::infrastructure::color_segmenter::ColorSegmenter;
use crate::shared::frame::Frame;
use crate::shared::track_config::TrackConfig;
use crate::shared::track_error::TrackError;
use crate::tracking::domain::trail::Trail;

use super::pipeline_logger::PipelineLogger;

/// Per-invocation state of a tracking run: the bounded trail and the
/// annotated output sequence.
///
/// Each [`step`](Self::step) consumes one decoded frame, updates the trail
/// and appends exactly one annotated frame.
pub struct FrameTrackAccumulator {
    working_width: u32,
    min_radius: f64,
    segmenter: Box<dyn FrameSegmenter>,
    locator: Box<dyn ObjectLocator>,
    annotator: Box<dyn FrameAnnotator>,
    trail: Trail,
    frames: Vec<Frame>,
}

impl FrameTrackAccumulator {
    pub fn new(
        config: &TrackConfig,
        segmenter: Box<dyn FrameSegmenter>,
        locator: Box<dyn ObjectLocator>,
        annotator: Box<dyn FrameAnnotator>,
    ) -> Self {
        Self {
            working_width: config.working_width,
            min_radius: config.min_radius,
            segmenter,
            locator,
            annotator,
            trail: Trail::new(config.trail_capacity),
            frames: Vec::new(),
        }
    }

    /// Wires the color segmenter, largest-contour locator and trail
    /// annotator for `config`.
    pub fn from_config(config: &TrackConfig) -> Self {
        Self::new(
            config,
            Box::new(ColorSegmenter::new(
                config.hsv_range(),
                config.blur_kernel_size,
                config.morph_iterations,
            )),
            Box::new(LargestContourLocator::new()),
            Box::new(TrailAnnotator::default()),
        )
    }

    /// Processes one frame and returns the detection it produced, if any.
    pub fn step(
        &mut self,
        frame: Frame,
        logger: &mut dyn PipelineLogger,
    ) -> Result<Option<Detection>, TrackError> {
        let mut frame = frame.resized_to_width(self.working_width);
        let index = frame.index();

        let t0 = Instant::now();
        let mask = self
            .segmenter
            .segment(&frame)
            .map_err(stage_failed("segment", index))?;
        logger.timing("segment", elapsed_ms(t0));

        let t0 = Instant::now();
        let detection = self.locator.locate(&mask).map_err(stage_failed("locate", index))?;
        logger.timing("locate", elapsed_ms(t0));

        self.trail.push(detection.map(|d| d.center));

        // Small detections still feed the trail; only their markers are hidden.
        let marked = detection.filter(|d| d.radius() > self.min_radius);

        let t0 = Instant::now();
        self.annotator
            .annotate(&mut frame, marked.as_ref(), &self.trail)
            .map_err(stage_failed("annotate", index))?;
        logger.timing("annotate", elapsed_ms(t0));

        logger.metric("detected", if detection.is_some() { 1.0 } else { 0.0 });
        logger.metric("trail_len", self.trail.len() as f64);

        self.frames.push(frame);
        Ok(detection)
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Hands over the annotated sequence.
    pub fn finish(self) -> Result<Vec<Frame>, TrackError> {
        if self.frames.is_empty() {
            return Err(TrackError::EmptySequence);
        }
        Ok(self.frames)
    }
}

fn stage_failed(
    stage: &'static str,
    frame: usize,
) -> impl FnOnce(Box<dyn std::error::Error>) -> TrackError {
    move |source| TrackError::Vision {
        stage,
        frame,
        source,
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
