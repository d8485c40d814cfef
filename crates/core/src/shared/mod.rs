pub mod constants;
pub mod cv_mat;
pub mod frame;
pub mod point;
pub mod track_config;
pub mod track_error;
pub mod video_metadata;
