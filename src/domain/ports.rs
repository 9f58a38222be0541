use crate::utils::error::Result;
use std::path::Path;

/// Byte-level access to the place records are persisted.
pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Replaces the whole file. On failure the previous contents must survive.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}
