//! Error types for the asset classification library.
//!
//! Classification itself never fails; these errors only surface at the
//! fallible edges: reading files from disk and JSON encode/decode.

use thiserror::Error;

/// Main error type for assettype operations.
#[derive(Debug, Error)]
pub enum AssetError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File exceeds the configured size limit
    #[error("File too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for assettype operations
pub type Result<T> = std::result::Result<T, AssetError>;
