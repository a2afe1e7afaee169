//! Core data types: categories and classification inputs.

pub mod category;
pub mod input;

pub use category::{AssetTypeCategory, ParseCategoryError};
pub use input::{AssetInput, AssetRecord, FileField, FileHandle, LOCATION_FIELDS, TYPE_FIELDS};
