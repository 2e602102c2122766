//! Rich text editor (`rte`).

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::raw::{self, RawNode};
use crate::types::{Block, EditorDefinition};
use crate::value::{ControlValue, EditorConfig};

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// HTML value of a rich text block.
///
/// Serializes back to the bare HTML string it was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichTextValue {
    html: String,
}

impl RichTextValue {
    /// Create a rich text value.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// The raw HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl ControlValue for RichTextValue {
    fn from_raw(_block: &Block, raw: &RawNode) -> Result<Self> {
        match raw {
            Value::Null => Ok(Self::default()),
            Value::String(html) => Ok(Self::new(html.as_str())),
            other => Err(ConvertError::UnexpectedShape {
                expected: "string",
                found: raw::kind_of(other),
            }),
        }
    }

    fn is_valid(&self) -> bool {
        !self.searchable_text().is_empty()
    }

    fn searchable_text(&self) -> String {
        let text = TAG_PATTERN.replace_all(&self.html, " ");
        WHITESPACE_PATTERN.replace_all(&text, " ").trim().to_string()
    }
}

/// Rich text editor config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextConfig {
    /// Enabled toolbar buttons.
    pub toolbar: Vec<String>,
    /// Maximum width of inserted images, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_image_width: Option<u32>,
}

fn max_image_width(raw: &RawNode) -> Result<Option<u32>> {
    let field = "maxImageWidth";
    match raw::as_object(raw)?.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|width| u32::try_from(width).ok())
            .map(Some)
            .ok_or_else(|| ConvertError::InvalidField {
                field: field.to_string(),
                expected: "unsigned 32-bit integer",
                found: raw::kind_of(value),
            }),
    }
}

impl EditorConfig for RichTextConfig {
    fn from_raw(_editor: &EditorDefinition, raw: &RawNode) -> Result<Self> {
        if raw.is_null() {
            return Ok(Self::default());
        }
        Ok(Self {
            toolbar: raw::string_list_field(raw, "toolbar")?,
            max_image_width: max_image_width(raw)?,
        })
    }
}
