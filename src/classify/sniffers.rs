//! Content and extension sniffers.
//!
//! Uses `infer` for content-based detection and `mime_guess` to name the
//! conventional MIME type behind an extension.

use super::extension::extract_extension;
use tracing::{debug, trace};

/// Sniffer for content-based file type detection using `infer`.
pub struct ContentSniffer;

impl ContentSniffer {
    /// Sniff a MIME type from a byte prefix.
    pub fn sniff_bytes(data: &[u8]) -> Option<String> {
        trace!("Sniffing {} bytes of content", data.len());

        match infer::get(data) {
            Some(kind) => {
                debug!(
                    mime = kind.mime_type(),
                    extension = kind.extension(),
                    "Content type detected"
                );
                Some(kind.mime_type().to_string())
            }
            None => {
                debug!("No content type detected from {} bytes", data.len());
                None
            }
        }
    }
}

/// Sniffer for extension-based MIME lookups using `mime_guess`.
pub struct ExtensionSniffer;

impl ExtensionSniffer {
    /// Conventional MIME type for the extension of a filename or URL.
    pub fn guess_mime(filename_or_url: &str) -> Option<String> {
        let extension = extract_extension(filename_or_url)?;
        mime_guess::from_ext(&extension)
            .first()
            .map(|mime| mime.essence_str().to_string())
    }
}

/// Conventional MIME type for a filename or URL, if its extension is known.
pub fn guess_mime(filename_or_url: &str) -> Option<String> {
    ExtensionSniffer::guess_mime(filename_or_url)
}
