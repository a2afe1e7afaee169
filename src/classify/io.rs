//! Bounded file reading for building file handles from disk.

use super::config::ClassifierConfig;
use crate::core::FileHandle;
use crate::error::{AssetError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Read at most `limit` bytes from the start of `reader`.
pub fn read_prefix<R: Read>(reader: R, limit: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(limit.min(64 * 1024));
    reader.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

impl FileHandle {
    /// Build a handle for a file on disk.
    ///
    /// The declared type is left empty; classification relies on the
    /// content prefix (up to `max_sniff_size` bytes) and the file name.
    pub fn open<P: AsRef<Path>>(path: P, config: &ClassifierConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        if size > config.max_file_size {
            warn!(
                path = %path.display(),
                size,
                limit = config.max_file_size,
                "File exceeds size limit"
            );
            return Err(AssetError::FileTooLarge {
                size,
                limit: config.max_file_size,
            });
        }

        let content = read_prefix(file, config.max_sniff_size)?;
        debug!(
            path = %path.display(),
            bytes = content.len(),
            "Read content prefix"
        );

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(FileHandle::new(name, "").with_content(content))
    }
}
