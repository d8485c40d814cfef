pub mod file_blob;
pub mod memory_blob;
