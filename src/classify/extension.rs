//! Extension-based fallback detection.

use crate::core::AssetTypeCategory;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Closed extension sets per category.
pub const EXTENSION_TABLE: &[(AssetTypeCategory, &[&str])] = &[
    (
        AssetTypeCategory::Image,
        &[
            "jpg", "jpeg", "png", "gif", "svg", "webp", "bmp", "tiff", "tif", "ico", "heic", "avif",
        ],
    ),
    (
        AssetTypeCategory::Video,
        &["mp4", "webm", "mov", "avi", "wmv", "flv", "mkv", "m4v", "mpg", "mpeg"],
    ),
    (
        AssetTypeCategory::Audio,
        &["mp3", "wav", "ogg", "aac", "flac", "m4a", "wma"],
    ),
    (AssetTypeCategory::Pdf, &["pdf"]),
    (
        AssetTypeCategory::Model,
        &["obj", "stl", "glb", "gltf", "fbx", "3ds", "dae", "blend"],
    ),
    (
        AssetTypeCategory::Spreadsheet,
        &["xlsx", "xls", "csv", "numbers", "ods", "gsheet"],
    ),
    (
        AssetTypeCategory::Document,
        &[
            "docx", "doc", "rtf", "txt", "md", "pages", "odt", "pptx", "ppt", "odp", "key",
        ],
    ),
];

static EXTENSION_INDEX: Lazy<HashMap<&'static str, AssetTypeCategory>> = Lazy::new(|| {
    EXTENSION_TABLE
        .iter()
        .flat_map(|(category, exts)| exts.iter().map(move |ext| (*ext, *category)))
        .collect()
});

// Leading extension characters; anything after them (`;v=2`, `)`) is ignored.
static RE_EXTENSION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+").expect("valid extension token regex"));

/// Extract the lower-cased extension from a filename or URL.
///
/// Query strings and fragments are stripped and only the last path segment
/// is considered, so `https://cdn.example.com/a/image.png?w=100` yields
/// `png` and `https://example.com/noext` yields nothing.
pub fn extract_extension(filename_or_url: &str) -> Option<String> {
    let path = filename_or_url
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let segment = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
    let (_, token) = segment.rsplit_once('.')?;
    RE_EXTENSION_TOKEN
        .find(token)
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// Category for an already-extracted extension.
pub fn category_for_extension(extension: &str) -> Option<AssetTypeCategory> {
    EXTENSION_INDEX
        .get(extension.to_ascii_lowercase().as_str())
        .copied()
}

/// Classify a filename or URL by its extension alone.
pub fn detect_type_from_extension(filename_or_url: &str) -> AssetTypeCategory {
    extract_extension(filename_or_url)
        .and_then(|ext| category_for_extension(&ext))
        .unwrap_or(AssetTypeCategory::Unknown)
}
