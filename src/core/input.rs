//! Classification inputs.
//!
//! Upstream API responses disagree about where type information lives, so
//! the classifier accepts several shapes. Each shape is an explicit variant
//! of [`AssetInput`] rather than a loosely probed object.

use crate::error::{AssetError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names carrying a type signal, highest priority first.
pub const TYPE_FIELDS: [&str; 4] = ["type", "asset_type", "content_type", "mime_type"];

/// Field names carrying a location string, highest priority first.
pub const LOCATION_FIELDS: [&str; 3] = ["url", "file_url", "file"];

/// A binary file handle: declared MIME type plus file name.
///
/// `content` optionally holds a bounded prefix of the file bytes for
/// content sniffing. It is never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    #[serde(default)]
    pub name: String,
    /// Declared MIME type, possibly empty.
    #[serde(rename = "type", default)]
    pub mime: String,
    #[serde(skip)]
    pub content: Option<Vec<u8>>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            content: None,
        }
    }

    /// Attach a content prefix used for sniffing.
    pub fn with_content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Declared type, `None` when blank.
    pub fn declared_type(&self) -> Option<&str> {
        non_blank(&self.mime)
    }

    fn from_json(value: &Value) -> Self {
        Self {
            name: str_field(value, "name").unwrap_or_default().to_string(),
            mime: str_field(value, "type").unwrap_or_default().to_string(),
            content: None,
        }
    }
}

/// The `file` field of an asset record holds either a nested handle or a
/// location string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileField {
    Location(String),
    Handle(FileHandle),
}

/// A loosely-typed record describing an uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetRecord {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AssetRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, value: impl Into<String>) -> Self {
        self.type_ = Some(value.into());
        self
    }

    pub fn with_asset_type(mut self, value: impl Into<String>) -> Self {
        self.asset_type = Some(value.into());
        self
    }

    pub fn with_content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    pub fn with_mime_type(mut self, value: impl Into<String>) -> Self {
        self.mime_type = Some(value.into());
        self
    }

    pub fn with_file(mut self, handle: FileHandle) -> Self {
        self.file = Some(FileField::Handle(handle));
        self
    }

    pub fn with_file_location(mut self, location: impl Into<String>) -> Self {
        self.file = Some(FileField::Location(location.into()));
        self
    }

    pub fn with_url(mut self, value: impl Into<String>) -> Self {
        self.url = Some(value.into());
        self
    }

    pub fn with_file_url(mut self, value: impl Into<String>) -> Self {
        self.file_url = Some(value.into());
        self
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// First non-blank value among `type`, `asset_type`, `content_type`,
    /// `mime_type`.
    pub fn type_signal(&self) -> Option<&str> {
        [
            &self.type_,
            &self.asset_type,
            &self.content_type,
            &self.mime_type,
        ]
        .into_iter()
        .find_map(|field| field.as_deref().and_then(non_blank))
    }

    /// Nested file handle under `file`, if that field is not a string.
    pub fn nested_file(&self) -> Option<&FileHandle> {
        match &self.file {
            Some(FileField::Handle(handle)) => Some(handle),
            _ => None,
        }
    }

    /// First non-blank value among `url`, `file_url`, and a string `file`.
    pub fn location(&self) -> Option<&str> {
        let file = match &self.file {
            Some(FileField::Location(location)) => Some(location.as_str()),
            _ => None,
        };
        [self.url.as_deref(), self.file_url.as_deref(), file]
            .into_iter()
            .flatten()
            .find_map(non_blank)
    }

    /// True when no field the classifier looks at is populated.
    pub fn is_empty(&self) -> bool {
        self.type_signal().is_none() && self.nested_file().is_none() && self.location().is_none()
    }

    /// Build a record from arbitrary JSON.
    ///
    /// Non-string values are ignored rather than rejected, and non-object
    /// values produce an empty record.
    pub fn from_json(value: &Value) -> Self {
        let owned = |key: &str| str_field(value, key).map(str::to_string);
        let file = match value.get("file") {
            Some(Value::String(location)) => Some(FileField::Location(location.clone())),
            Some(nested @ Value::Object(_)) => Some(FileField::Handle(FileHandle::from_json(nested))),
            _ => None,
        };
        Self {
            type_: owned("type"),
            asset_type: owned("asset_type"),
            content_type: owned("content_type"),
            mime_type: owned("mime_type"),
            file,
            url: owned("url"),
            file_url: owned("file_url"),
            name: owned("name"),
        }
    }

    /// Parse JSON text into a record. Fails only on malformed JSON.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json_str)
            .map_err(|e| AssetError::Serialization(format!("JSON deserialization error: {}", e)))?;
        Ok(Self::from_json(&value))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AssetError::Serialization(format!("JSON serialization error: {}", e)))
    }
}

/// Anything the classifier accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssetInput {
    /// Null, undefined, or otherwise absent.
    #[default]
    Empty,
    /// A bare string that may be a MIME type or a filename/URL.
    Text(String),
    /// A string known to be a MIME type.
    Mime(String),
    /// A string known to be a filename or URL.
    Filename(String),
    File(FileHandle),
    Record(AssetRecord),
}

impl AssetInput {
    /// Map JSON onto an input: null to `Empty`, strings to `Text`, objects to
    /// `Record`, anything else to `Empty`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(text) => AssetInput::Text(text.clone()),
            Value::Object(_) => AssetInput::Record(AssetRecord::from_json(value)),
            _ => AssetInput::Empty,
        }
    }

    /// The raw string for string-shaped inputs.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AssetInput::Text(s) | AssetInput::Mime(s) | AssetInput::Filename(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AssetInput {
    fn from(value: &str) -> Self {
        AssetInput::Text(value.to_string())
    }
}

impl From<String> for AssetInput {
    fn from(value: String) -> Self {
        AssetInput::Text(value)
    }
}

impl From<&String> for AssetInput {
    fn from(value: &String) -> Self {
        AssetInput::Text(value.clone())
    }
}

impl From<FileHandle> for AssetInput {
    fn from(value: FileHandle) -> Self {
        AssetInput::File(value)
    }
}

impl From<AssetRecord> for AssetInput {
    fn from(value: AssetRecord) -> Self {
        AssetInput::Record(value)
    }
}

impl From<&Value> for AssetInput {
    fn from(value: &Value) -> Self {
        AssetInput::from_json(value)
    }
}

impl From<&AssetInput> for AssetInput {
    fn from(value: &AssetInput) -> Self {
        value.clone()
    }
}

impl<T: Into<AssetInput>> From<Option<T>> for AssetInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(AssetInput::Empty, Into::into)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}
