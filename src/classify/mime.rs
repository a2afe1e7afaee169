//! Ordered MIME-type match table.
//!
//! Some MIME strings satisfy several rules (an OOXML spreadsheet contains
//! both `sheet` and `officedocument`), so rules are evaluated strictly
//! top-to-bottom and the first hit wins.

use crate::core::AssetTypeCategory;

/// A single predicate over a lower-cased type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeRule {
    Prefix(&'static str),
    Equals(&'static str),
    Contains(&'static str),
}

impl MimeRule {
    pub fn matches(&self, mime: &str) -> bool {
        match self {
            MimeRule::Prefix(p) => mime.starts_with(*p),
            MimeRule::Equals(e) => mime == *e,
            MimeRule::Contains(c) => mime.contains(*c),
        }
    }
}

use MimeRule::{Contains, Equals, Prefix};

/// (category, any-of rules) pairs, in precedence order.
pub const MIME_RULES: &[(AssetTypeCategory, &[MimeRule])] = &[
    (AssetTypeCategory::Image, &[Prefix("image/")]),
    (AssetTypeCategory::Video, &[Prefix("video/")]),
    (AssetTypeCategory::Audio, &[Prefix("audio/")]),
    (
        AssetTypeCategory::Pdf,
        &[Equals("application/pdf"), Contains("pdf")],
    ),
    (
        AssetTypeCategory::Model,
        &[
            Prefix("model/"),
            Contains("3d"),
            Contains("stl"),
            Contains("obj"),
        ],
    ),
    (
        AssetTypeCategory::Spreadsheet,
        &[
            Contains("spreadsheet"),
            Contains("excel"),
            Contains("csv"),
            Contains("numbers"),
            Contains("sheet"),
        ],
    ),
    (
        AssetTypeCategory::Document,
        &[
            Contains("text/"),
            Contains("document"),
            Contains("word"),
            Contains("powerpoint"),
            Contains("presentation"),
            Contains("rtf"),
            Contains("msword"),
            Contains("officedocument"),
            Contains("opendocument"),
        ],
    ),
];

/// Match a type string against the table.
///
/// A bare category name (`"video"`) is accepted as its own category before
/// the MIME rules run. Returns `None` when nothing matches.
pub fn match_mime(type_string: &str) -> Option<AssetTypeCategory> {
    let mime = type_string.trim().to_ascii_lowercase();
    if mime.is_empty() {
        return None;
    }

    if let Ok(category) = mime.parse::<AssetTypeCategory>() {
        if !category.is_unknown() {
            return Some(category);
        }
    }

    MIME_RULES
        .iter()
        .find(|(_, rules)| rules.iter().any(|rule| rule.matches(&mime)))
        .map(|(category, _)| *category)
}
