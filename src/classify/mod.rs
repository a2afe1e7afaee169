//! Asset-type classification runtime.
//!
//! Maps MIME types, filenames, file handles and loosely-typed asset records
//! onto an [`AssetTypeCategory`]. Classification is total: anything without
//! a usable signal resolves to `unknown`.

pub mod batch;
pub mod config;
pub mod detect;
pub mod extension;
pub mod io;
pub mod mime;
pub mod predicates;
pub mod sniffers;

pub use batch::{classify_all, summarize, CategoryCounts};
pub use config::ClassifierConfig;
pub use detect::{classify, default_classifier, detect_type, Classification, Classifier, SignalSource};
pub use extension::{detect_type_from_extension, extract_extension};
pub use mime::match_mime;
pub use predicates::{is_image_asset, is_image_type};
pub use sniffers::guess_mime;

// Re-export key types from core for convenience
pub use crate::core::{AssetInput, AssetRecord, AssetTypeCategory, FileField, FileHandle};
