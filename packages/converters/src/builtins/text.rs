//! Single-line text editor (`textstring`).

use serde::Serialize;
use serde_json::Value;

use crate::config::TEXTSTRING_VIEW;
use crate::converter::ViewConverter;
use crate::error::{ConvertError, Result};
use crate::raw::{self, RawNode};
use crate::types::{Block, EditorDefinition};
use crate::value::{ControlValue, EditorConfig};
use crate::view::ViewId;
use crate::wrapper::ControlWrapper;

/// Plain text value.
///
/// Accepts either a bare string or an object with a string `value` field.
/// A null payload is an empty value. Serializes as the object form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextValue {
    value: String,
}

impl TextValue {
    /// Create a text value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ControlValue for TextValue {
    fn from_raw(_block: &Block, raw: &RawNode) -> Result<Self> {
        match raw {
            Value::Null => Ok(Self::default()),
            Value::String(s) => Ok(Self::new(s.as_str())),
            Value::Object(_) => Ok(Self::new(raw::string_field(raw, "value")?)),
            other => Err(ConvertError::UnexpectedShape {
                expected: "string or object",
                found: raw::kind_of(other),
            }),
        }
    }

    fn is_valid(&self) -> bool {
        !self.value.trim().is_empty()
    }

    fn searchable_text(&self) -> String {
        self.value.clone()
    }
}

/// Config of the text editor: inline style and surrounding markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextConfig {
    pub style: String,
    pub markup: String,
}

impl EditorConfig for TextConfig {
    fn from_raw(_editor: &EditorDefinition, raw: &RawNode) -> Result<Self> {
        if raw.is_null() {
            return Ok(Self::default());
        }
        Ok(Self {
            style: raw::optional_string_field(raw, "style")?.unwrap_or_default(),
            markup: raw::optional_string_field(raw, "markup")?.unwrap_or_default(),
        })
    }
}

/// Hand-written converter for the `textstring` editor.
///
/// The editor only has a config when its definition carries one.
#[derive(Debug, Clone)]
pub struct TextStringConverter {
    view: ViewId,
}

impl TextStringConverter {
    /// Create the converter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: ViewId::new(TEXTSTRING_VIEW),
        }
    }
}

impl Default for TextStringConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewConverter for TextStringConverter {
    fn view(&self) -> &ViewId {
        &self.view
    }

    fn label(&self) -> &str {
        "textstring"
    }

    fn create_value(&self, block: &Block, raw: &RawNode) -> Result<Box<dyn ControlValue>> {
        Ok(Box::new(<TextValue as ControlValue>::from_raw(block, raw)?))
    }

    fn create_config(
        &self,
        editor: &EditorDefinition,
        raw: &RawNode,
    ) -> Result<Option<Box<dyn EditorConfig>>> {
        if raw.is_null() {
            return Ok(None);
        }
        Ok(Some(Box::new(<TextConfig as EditorConfig>::from_raw(editor, raw)?)))
    }

    fn create_wrapper(&self, block: &Block) -> Result<ControlWrapper> {
        let value = self.create_value(block, block.value())?;
        let editor = block.editor();
        let config = self.create_config(editor, &editor.config)?;
        Ok(ControlWrapper::new(block.clone(), value, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::Converter;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn parse(raw: RawNode) -> Result<TextValue> {
        let block = Block::new(TEXTSTRING_VIEW, raw.clone());
        <TextValue as ControlValue>::from_raw(&block, &raw)
    }

    #[test]
    fn test_text_value_from_string() {
        assert_eq!(parse(json!("hello")).unwrap(), TextValue::new("hello"));
    }

    #[test]
    fn test_text_value_from_object() {
        assert_eq!(parse(json!({"value": "hello"})).unwrap(), TextValue::new("hello"));
    }

    #[test]
    fn test_text_value_from_null() {
        let value = parse(json!(null)).unwrap();
        assert_eq!(value.value(), "");
        assert!(!value.is_valid());
    }

    #[test]
    fn test_text_value_rejects_number_field() {
        let err = parse(json!({"value": 123})).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidField { found: "number", .. }));
    }

    #[test]
    fn test_text_value_rejects_array() {
        assert!(parse(json!(["hello"])).is_err());
    }

    #[test]
    fn test_text_config() {
        let editor = EditorDefinition::new(TEXTSTRING_VIEW);
        let config = <TextConfig as EditorConfig>::from_raw(
            &editor,
            &json!({"style": "font-size: 36px", "markup": "<h1>#value#</h1>"}),
        )
        .unwrap();

        assert_eq!(
            config,
            TextConfig {
                style: "font-size: 36px".to_string(),
                markup: "<h1>#value#</h1>".to_string(),
            }
        );
    }

    #[test]
    fn test_text_value_serializes_as_object() {
        let value = parse(json!("hello")).unwrap();
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"value": "hello"}));
    }

    #[test]
    fn test_converter_matches_any_case() {
        let converter = TextStringConverter::new();
        let block = Block::new("TextString", json!("hello"));

        let value = converter.try_convert_value(&block, block.value()).unwrap();
        assert_eq!(value.searchable_text(), "hello");
    }

    #[test]
    fn test_converter_config_absent_for_null() {
        let converter = TextStringConverter::new();
        let editor = EditorDefinition::new(TEXTSTRING_VIEW);
        assert!(converter.try_convert_config(&editor, &json!(null)).is_none());
    }

    #[test]
    fn test_converter_wrapper() {
        let converter = TextStringConverter::new();
        let editor = EditorDefinition::new(TEXTSTRING_VIEW)
            .with_config(json!({"markup": "<h2>#value#</h2>"}));
        let block = Block::with_editor(Arc::new(editor), json!("Heading"));

        let wrapper = converter.try_wrap(&block).unwrap();
        assert_eq!(wrapper.value_as::<TextValue>().map(TextValue::value), Some("Heading"));
        assert_eq!(
            wrapper.config_as::<TextConfig>().map(|c| c.markup.as_str()),
            Some("<h2>#value#</h2>")
        );
    }

    #[test]
    fn test_converter_wrapper_without_config() {
        let converter = TextStringConverter::new();
        let block = Block::new(TEXTSTRING_VIEW, json!("Plain"));

        let wrapper = converter.try_wrap(&block).unwrap();
        assert!(wrapper.config().is_none());
    }
}
