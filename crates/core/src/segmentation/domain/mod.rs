pub mod frame_segmenter;
pub mod hsv_range;
pub mod mask;
