pub mod blob_trigger_handler;
pub mod frame_track_accumulator;
pub mod pipeline_logger;
pub mod track_video_use_case;
