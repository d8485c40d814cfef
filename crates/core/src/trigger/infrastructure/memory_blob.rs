use std::io::{Cursor, Read};

use crate::trigger::domain::input_blob::InputBlob;

/// Input blob held entirely in memory, as delivered by a storage binding.
pub struct MemoryInputBlob {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryInputBlob {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl InputBlob for MemoryInputBlob {
    fn name(&self) -> &str {
        &self.name
    }

    fn length(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn open(&self) -> std::io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(self.bytes.as_slice())))
    }
}
