use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::shared::constants::SUCCESS_MARKER;
use crate::shared::track_error::TrackError;
use crate::trigger::domain::input_blob::InputBlob;
use crate::trigger::domain::output_blob::OutputBlob;

use super::track_video_use_case::TrackVideoUseCase;

/// Entry point invoked once per arriving video blob.
///
/// Runs the tracking use case over the blob and stores the resulting
/// animation in the output blob. The output is written only on success.
pub struct BlobTriggerHandler {
    use_case: TrackVideoUseCase,
}

impl BlobTriggerHandler {
    pub fn new(use_case: TrackVideoUseCase) -> Self {
        Self { use_case }
    }

    pub fn handle(
        &mut self,
        input: &dyn InputBlob,
        output: &mut dyn OutputBlob,
    ) -> Result<&'static str, TrackError> {
        let spool;
        let path: &Path = match input.local_path() {
            Some(path) => path,
            None => {
                spool = spool_to_tempfile(input)?;
                spool.path()
            }
        };

        let report = self.use_case.execute(path)?;
        output.set(&report.animation)?;

        log::info!(
            "Processed blob\nName: {}\nBlob Size: {} bytes",
            input.name(),
            input.length()
        );
        Ok(SUCCESS_MARKER)
    }
}

/// Copies the blob into a temporary file the decoder can open by path.
/// The file is removed when the returned handle drops.
fn spool_to_tempfile(input: &dyn InputBlob) -> Result<NamedTempFile, TrackError> {
    let suffix = Path::new(input.name())
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let mut file = tempfile::Builder::new()
        .prefix("balltrack-")
        .suffix(&suffix)
        .tempfile()?;

    let mut reader = input.open()?;
    let copied = std::io::copy(&mut reader, &mut file)?;
    file.flush()?;

    if copied != input.length() {
        log::warn!(
            "Blob {} reported {} bytes but {copied} were read",
            input.name(),
            input.length()
        );
    }
    log::debug!("Spooled {copied} bytes to {}", file.path().display());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::pipeline_logger::NullPipelineLogger;
    use crate::shared::frame::Frame;
    use crate::shared::track_config::TrackConfig;
    use crate::shared::video_metadata::VideoMetadata;
    use crate::test_support::{create_test_video, moving_ball_frames, WHITE};
    use crate::trigger::infrastructure::file_blob::{FileInputBlob, FileOutputBlob};
    use crate::trigger::infrastructure::memory_blob::MemoryInputBlob;
    use crate::video::domain::video_reader::{FrameResult, VideoReader};
    use crate::video::infrastructure::ffmpeg_reader::FfmpegReader;
    use crate::video::infrastructure::gif_encoder::GifAnimationEncoder;
    use image::codecs::gif::GifDecoder;
    use image::AnimationDecoder;
    use std::io::Cursor;

    /// Records every write instead of persisting it.
    #[derive(Default)]
    struct RecordingOutput {
        writes: Vec<Vec<u8>>,
    }

    impl OutputBlob for RecordingOutput {
        fn set(&mut self, bytes: &[u8]) -> std::io::Result<()> {
            self.writes.push(bytes.to_vec());
            Ok(())
        }
    }

    fn handler() -> BlobTriggerHandler {
        BlobTriggerHandler::new(TrackVideoUseCase::new(
            TrackConfig {
                working_width: 160,
                ..TrackConfig::default()
            },
            Box::new(FfmpegReader::new()),
            Box::new(GifAnimationEncoder::default()),
            Box::new(NullPipelineLogger),
        ))
    }

    fn sample_video(dir: &Path, frames: &[Frame]) -> std::path::PathBuf {
        let path = dir.join("ball.mp4");
        create_test_video(&path, frames, 25);
        path
    }

    fn gif_frame_count(bytes: &[u8]) -> usize {
        GifDecoder::new(Cursor::new(bytes))
            .unwrap()
            .into_frames()
            .collect_frames()
            .unwrap()
            .len()
    }

    #[test]
    fn test_memory_blob_is_spooled_and_output_set_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_video(dir.path(), &moving_ball_frames(4, 160, 120));
        let input = MemoryInputBlob::new("incoming/ball.mp4", std::fs::read(&path).unwrap());
        let mut output = RecordingOutput::default();

        let marker = handler().handle(&input, &mut output).unwrap();

        assert_eq!(marker, "ok");
        assert_eq!(output.writes.len(), 1);
        assert_eq!(gif_frame_count(&output.writes[0]), 4);
    }

    #[test]
    fn test_file_blob_writes_destination() {
        let dir = tempfile::tempdir().unwrap();
        let mut frames = moving_ball_frames(3, 160, 120);
        frames.push(Frame::filled(160, 120, WHITE, 3));
        let path = sample_video(dir.path(), &frames);
        let destination = dir.path().join("newblob").join("test.gif");

        let input = FileInputBlob::new(&path).unwrap();
        let mut output = FileOutputBlob::new(&destination);
        handler().handle(&input, &mut output).unwrap();

        let bytes = std::fs::read(&destination).unwrap();
        assert_eq!(gif_frame_count(&bytes), 4);
    }

    #[test]
    fn test_undecodable_blob_writes_nothing() {
        let input = MemoryInputBlob::new("garbage.mp4", b"this is not a video".to_vec());
        let mut output = RecordingOutput::default();

        let err = handler().handle(&input, &mut output).unwrap_err();
        assert!(matches!(err, TrackError::Open { .. }));
        assert!(output.writes.is_empty());
    }

    #[test]
    fn test_empty_video_writes_nothing() {
        struct NoFrames;

        impl VideoReader for NoFrames {
            fn open(
                &mut self,
                _path: &Path,
            ) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
                Ok(VideoMetadata {
                    width: 160,
                    height: 120,
                    fps: 25.0,
                    total_frames: 0,
                    codec: String::new(),
                    source_path: None,
                })
            }

            fn frames(&mut self) -> Box<dyn Iterator<Item = FrameResult> + '_> {
                Box::new(std::iter::empty())
            }

            fn close(&mut self) {}
        }

        let mut handler = BlobTriggerHandler::new(TrackVideoUseCase::new(
            TrackConfig::default(),
            Box::new(NoFrames),
            Box::new(GifAnimationEncoder::default()),
            Box::new(NullPipelineLogger),
        ));
        let input = MemoryInputBlob::new("empty.mp4", Vec::new());
        let mut output = RecordingOutput::default();

        let err = handler.handle(&input, &mut output).unwrap_err();
        assert!(matches!(err, TrackError::EmptySequence));
        assert!(output.writes.is_empty());
    }

    #[test]
    fn test_spool_keeps_extension_and_bytes() {
        let input = MemoryInputBlob::new("clips/ball.mp4", b"payload".to_vec());
        let spooled = spool_to_tempfile(&input).unwrap();

        assert_eq!(
            spooled.path().extension().and_then(|e| e.to_str()),
            Some("mp4")
        );
        assert_eq!(std::fs::read(spooled.path()).unwrap(), b"payload");
    }
}
