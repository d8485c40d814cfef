pub mod input_blob;
pub mod output_blob;
