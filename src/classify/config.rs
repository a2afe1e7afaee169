//! Configuration for the classifier.

use crate::error::{AssetError, Result};
use serde::{Deserialize, Serialize};

/// Maximum content prefix handed to the content sniffer (4KB)
pub const MAX_SNIFF_SIZE: usize = 4096;

/// Default upper bound for files opened from disk (100MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Batches below this size are classified sequentially.
pub const PAR_THRESHOLD: usize = 64;

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Sniff file handle content when the declared type is absent or unmatched.
    /// Off by default; a nested handle's content is only consulted after the
    /// record's own locations.
    pub content_sniffing: bool,
    /// Fall back to the file handle's name when type and content are silent.
    pub file_name_fallback: bool,
    /// Bytes of content considered by the sniffer.
    pub max_sniff_size: usize,
    /// Largest file `FileHandle::open` accepts.
    pub max_file_size: u64,
    pub parallel_threshold: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            content_sniffing: false,
            file_name_fallback: false,
            max_sniff_size: MAX_SNIFF_SIZE,
            max_file_size: MAX_FILE_SIZE,
            parallel_threshold: PAR_THRESHOLD,
        }
    }
}

impl ClassifierConfig {
    /// Default limits with content sniffing and the file name fallback
    /// switched on for file handles.
    pub fn with_fallbacks() -> Self {
        Self {
            content_sniffing: true,
            file_name_fallback: true,
            ..Self::default()
        }
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| AssetError::Serialization(format!("JSON deserialization error: {}", e)))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AssetError::Serialization(format!("JSON serialization error: {}", e)))
    }
}
