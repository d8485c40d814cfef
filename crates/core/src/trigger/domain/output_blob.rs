/// Destination for the encoded animation. Written at most once per run.
pub trait OutputBlob: Send {
    fn set(&mut self, bytes: &[u8]) -> std::io::Result<()>;
}
