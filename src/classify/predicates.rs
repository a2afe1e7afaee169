//! Boolean convenience predicates.

use super::detect::Classifier;
use crate::core::{AssetInput, AssetTypeCategory};

impl Classifier {
    /// True when the value denotes an image.
    ///
    /// String inputs are read as a type name: `"image"` or any `image/*`
    /// MIME type, case-insensitively. Everything else is classified.
    pub fn is_image_type(&self, input: &AssetInput) -> bool {
        match input {
            AssetInput::Empty => false,
            AssetInput::Text(s) | AssetInput::Mime(s) => is_image_type_name(s),
            _ => self.detect(input) == AssetTypeCategory::Image,
        }
    }

    pub fn is_image_asset(&self, input: &AssetInput) -> bool {
        self.detect(input) == AssetTypeCategory::Image
    }
}

fn is_image_type_name(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    value == "image" || value.starts_with("image/")
}

/// See [`Classifier::is_image_type`].
pub fn is_image_type(input: impl Into<AssetInput>) -> bool {
    super::detect::default_classifier().is_image_type(&input.into())
}

/// True iff the input classifies as an image.
pub fn is_image_asset(input: impl Into<AssetInput>) -> bool {
    super::detect::default_classifier().is_image_asset(&input.into())
}
