use std::io::Read;
use std::path::Path;

/// A named binary payload that fired the trigger.
pub trait InputBlob: Send {
    fn name(&self) -> &str;

    /// Size in bytes as reported by the store.
    fn length(&self) -> u64;

    /// A fresh reader over the blob's bytes.
    fn open(&self) -> std::io::Result<Box<dyn Read + '_>>;

    /// Set when the bytes already live in a local file the decoder can open
    /// directly. Default: `None`.
    fn local_path(&self) -> Option<&Path> {
        None
    }
}
