//! Field-priority resolver.
//!
//! Resolution order, first hit wins:
//! 1. empty input resolves to `unknown`
//! 2. bare strings go through MIME matching, then extension detection
//! 3. file handles use their declared type
//! 4. records use `type`/`asset_type`/`content_type`/`mime_type`, then the
//!    declared type of a nested file handle, then `url`/`file_url`/`file` by
//!    extension
//!
//! Content sniffing and the file name fallback are opt-in
//! (`ClassifierConfig::with_fallbacks`). When enabled they run after every
//! declared signal, so a record's own locations still beat a nested handle's
//! content or name.

use super::config::ClassifierConfig;
use super::extension::{category_for_extension, extract_extension};
use super::mime::match_mime;
use super::sniffers::{ContentSniffer, ExtensionSniffer};
use crate::core::{AssetInput, AssetRecord, AssetTypeCategory, FileHandle};
use crate::error::{AssetError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Which part of the input decided the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    /// A declared type string (record field, file handle type, bare string).
    Mime,
    /// Magic bytes in a file handle's content prefix.
    Content,
    /// A filename or URL extension.
    Extension,
    /// No usable signal.
    Absent,
}

impl SignalSource {
    /// Same name serde uses.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalSource::Mime => "mime",
            SignalSource::Content => "content",
            SignalSource::Extension => "extension",
            SignalSource::Absent => "absent",
        }
    }
}

impl fmt::Display for SignalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category plus the signal that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: AssetTypeCategory,
    pub source: SignalSource,
    /// Lower-cased MIME type that matched, or the conventional MIME type of
    /// the matched extension.
    pub mime: Option<String>,
    /// Extension token that matched.
    pub extension: Option<String>,
}

impl Classification {
    pub fn unknown() -> Self {
        Self {
            category: AssetTypeCategory::Unknown,
            source: SignalSource::Absent,
            mime: None,
            extension: None,
        }
    }

    fn from_mime(category: AssetTypeCategory, source: SignalSource, mime: &str) -> Self {
        Self {
            category,
            source,
            mime: Some(mime.trim().to_ascii_lowercase()),
            extension: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.category.is_unknown()
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AssetError::Serialization(format!("JSON serialization error: {}", e)))
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| AssetError::Serialization(format!("JSON deserialization error: {}", e)))
    }
}

/// Stateless asset-type classifier.
///
/// Holding a `Classifier` only fixes its configuration; every call is
/// independent and the same input always yields the same category.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Category of any supported input.
    pub fn detect(&self, input: &AssetInput) -> AssetTypeCategory {
        self.classify(input).category
    }

    /// Category plus provenance of any supported input.
    pub fn classify(&self, input: &AssetInput) -> Classification {
        let result = match input {
            AssetInput::Empty => Classification::unknown(),
            AssetInput::Text(text) => self.classify_text(text),
            AssetInput::Mime(mime) => Self::classify_mime(mime).unwrap_or_else(Classification::unknown),
            AssetInput::Filename(location) => Self::classify_location(location),
            AssetInput::File(handle) => self.classify_file(handle),
            AssetInput::Record(record) => self.classify_record(record),
        };
        trace!(
            category = %result.category,
            source = %result.source,
            "Classified input"
        );
        result
    }

    /// A bare string: MIME type first, then filename/URL.
    pub fn classify_text(&self, text: &str) -> Classification {
        if text.trim().is_empty() {
            return Classification::unknown();
        }
        Self::classify_mime(text).unwrap_or_else(|| Self::classify_location(text))
    }

    pub fn classify_file(&self, handle: &FileHandle) -> Classification {
        Self::classify_declared(handle)
            .or_else(|| self.classify_fallbacks(handle))
            .unwrap_or_else(Classification::unknown)
    }

    pub fn classify_record(&self, record: &AssetRecord) -> Classification {
        if let Some(signal) = record.type_signal() {
            if let Some(result) = Self::classify_mime(signal) {
                return result;
            }
            debug!(signal, "Type field did not match any category");
            return record
                .location()
                .map(Self::classify_location)
                .unwrap_or_else(Classification::unknown);
        }

        let handle = record.nested_file();
        if let Some(result) = handle.and_then(Self::classify_declared) {
            return result;
        }

        if let Some(location) = record.location() {
            let result = Self::classify_location(location);
            if !result.is_unknown() {
                return result;
            }
        }

        handle
            .and_then(|handle| self.classify_fallbacks(handle))
            .unwrap_or_else(Classification::unknown)
    }

    fn classify_declared(handle: &FileHandle) -> Option<Classification> {
        handle.declared_type().and_then(Self::classify_mime)
    }

    /// Content sniffing, then the handle's name, as far as the config allows.
    fn classify_fallbacks(&self, handle: &FileHandle) -> Option<Classification> {
        if self.config.content_sniffing {
            if let Some(content) = handle.content.as_deref() {
                let prefix = &content[..content.len().min(self.config.max_sniff_size)];
                if let Some(sniffed) = ContentSniffer::sniff_bytes(prefix) {
                    if let Some(category) = match_mime(&sniffed) {
                        debug!(name = %handle.name, mime = %sniffed, "Classified by content");
                        return Some(Classification::from_mime(
                            category,
                            SignalSource::Content,
                            &sniffed,
                        ));
                    }
                }
            }
        }

        if self.config.file_name_fallback {
            let result = Self::classify_location(&handle.name);
            if !result.is_unknown() {
                debug!(name = %handle.name, "Classified file handle by name");
                return Some(result);
            }
        }

        None
    }

    fn classify_mime(mime: &str) -> Option<Classification> {
        match_mime(mime).map(|category| Classification::from_mime(category, SignalSource::Mime, mime))
    }

    fn classify_location(location: &str) -> Classification {
        let Some(extension) = extract_extension(location) else {
            return Classification::unknown();
        };
        match category_for_extension(&extension) {
            Some(category) => Classification {
                category,
                source: SignalSource::Extension,
                mime: ExtensionSniffer::guess_mime(location),
                extension: Some(extension),
            },
            None => Classification::unknown(),
        }
    }
}

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(Classifier::new);

/// The classifier behind the free functions.
pub fn default_classifier() -> &'static Classifier {
    &DEFAULT_CLASSIFIER
}

/// Category of any supported input. Never fails; absent or unrecognised
/// signals resolve to `unknown`.
pub fn detect_type(input: impl Into<AssetInput>) -> AssetTypeCategory {
    DEFAULT_CLASSIFIER.detect(&input.into())
}

/// Category plus provenance of any supported input.
pub fn classify(input: impl Into<AssetInput>) -> Classification {
    DEFAULT_CLASSIFIER.classify(&input.into())
}
