use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::trigger::domain::input_blob::InputBlob;
use crate::trigger::domain::output_blob::OutputBlob;

/// Input blob backed by a file on local disk.
pub struct FileInputBlob {
    path: PathBuf,
    name: String,
    length: u64,
}

impl FileInputBlob {
    /// Stats the file once; the name is its final path component.
    pub fn new(path: &Path) -> std::io::Result<Self> {
        let length = fs::metadata(path)?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            path: path.to_path_buf(),
            name,
            length,
        })
    }
}

impl InputBlob for FileInputBlob {
    fn name(&self) -> &str {
        &self.name
    }

    fn length(&self) -> u64 {
        self.length
    }

    fn open(&self) -> std::io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }

    fn local_path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Output blob that writes to a local file, creating parent directories.
pub struct FileOutputBlob {
    path: PathBuf,
}

impl FileOutputBlob {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputBlob for FileOutputBlob {
    fn set(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, bytes)
    }
}
