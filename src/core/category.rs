//! The closed set of asset-type categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical asset-type bucket used to choose a rendering strategy.
///
/// `Unknown` is both a valid result and the fallback for absent or
/// unrecognised signals.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetTypeCategory {
    Image,
    Video,
    Audio,
    Pdf,
    Document,
    Spreadsheet,
    Model,
    #[default]
    Unknown,
}

/// Error returned when parsing a category name fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid asset type category: {0}")]
pub struct ParseCategoryError(pub String);

impl AssetTypeCategory {
    /// Every category, in declaration order.
    pub const ALL: [AssetTypeCategory; 8] = [
        AssetTypeCategory::Image,
        AssetTypeCategory::Video,
        AssetTypeCategory::Audio,
        AssetTypeCategory::Pdf,
        AssetTypeCategory::Document,
        AssetTypeCategory::Spreadsheet,
        AssetTypeCategory::Model,
        AssetTypeCategory::Unknown,
    ];

    /// Lower-case wire name, e.g. `"spreadsheet"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetTypeCategory::Image => "image",
            AssetTypeCategory::Video => "video",
            AssetTypeCategory::Audio => "audio",
            AssetTypeCategory::Pdf => "pdf",
            AssetTypeCategory::Document => "document",
            AssetTypeCategory::Spreadsheet => "spreadsheet",
            AssetTypeCategory::Model => "model",
            AssetTypeCategory::Unknown => "unknown",
        }
    }

    /// Human-readable name for tooltips and fallback icons.
    pub fn label(&self) -> &'static str {
        match self {
            AssetTypeCategory::Image => "Image",
            AssetTypeCategory::Video => "Video",
            AssetTypeCategory::Audio => "Audio",
            AssetTypeCategory::Pdf => "PDF",
            AssetTypeCategory::Document => "Document",
            AssetTypeCategory::Spreadsheet => "Spreadsheet",
            AssetTypeCategory::Model => "3D Model",
            AssetTypeCategory::Unknown => "File",
        }
    }

    /// Whether the asset can be rendered as an inline thumbnail.
    pub fn is_previewable(&self) -> bool {
        matches!(self, AssetTypeCategory::Image)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, AssetTypeCategory::Unknown)
    }
}

impl fmt::Display for AssetTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetTypeCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetTypeCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
