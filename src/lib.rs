//! Asset-type detection for product asset libraries.
//!
//! Decides how an uploaded file should be rendered (thumbnail vs. generic
//! icon) from whatever the backend happens to return: a MIME type, a
//! filename or URL, a file handle, or an asset record with inconsistent
//! field names.
//!
//! ```
//! use assettype::{detect_type, is_image_asset, AssetRecord, AssetTypeCategory};
//!
//! let record = AssetRecord::new().with_url("https://cdn.example.com/p/42.png?w=100");
//! assert_eq!(detect_type(record.clone()), AssetTypeCategory::Image);
//! assert!(is_image_asset(record));
//! ```

/// Core data types module
pub mod core;

pub mod classify;
pub mod error;
pub mod logging;

pub use classify::{
    classify, classify_all, detect_type, detect_type_from_extension, guess_mime, is_image_asset,
    is_image_type, summarize, CategoryCounts, Classification, Classifier, ClassifierConfig,
    SignalSource,
};
pub use crate::core::{AssetInput, AssetRecord, AssetTypeCategory, FileField, FileHandle};
pub use error::{AssetError, Result};
