//! Generic single-view converter over a value type and optional config type.

use crate::converter::handler::ViewConverter;
use crate::error::Result;
use crate::raw::RawNode;
use crate::registry::descriptor::{construct_config, construct_value};
use crate::registry::{ConfigCtor, RegistrationEntry, TypeDescriptor};
use crate::types::{Block, EditorDefinition};
use crate::value::{ControlValue, EditorConfig};
use crate::view::ViewId;
use crate::wrapper::ControlWrapper;

/// Converter for one view identifier backed by concrete Rust types.
///
/// `TypedConverter::new::<V>(view)` produces values of type `V` and no
/// config; `TypedConverter::with_config::<V, C>(view)` also produces
/// configs of type `C` and wraps blocks with both.
#[derive(Debug, Clone)]
pub struct TypedConverter {
    entry: RegistrationEntry,
}

impl TypedConverter {
    /// Create a converter for a value type without config.
    #[must_use]
    pub fn new<V: ControlValue>(view: impl Into<ViewId>) -> Self {
        Self {
            entry: RegistrationEntry::assemble(
                view.into(),
                TypeDescriptor::value::<V>(),
                construct_value::<V>,
                None,
            ),
        }
    }

    /// Create a converter for a value type and a config type.
    #[must_use]
    pub fn with_config<V: ControlValue, C: EditorConfig>(view: impl Into<ViewId>) -> Self {
        Self {
            entry: RegistrationEntry::assemble(
                view.into(),
                TypeDescriptor::value::<V>(),
                construct_value::<V>,
                Some((
                    TypeDescriptor::config::<C>(),
                    construct_config::<C> as ConfigCtor,
                )),
            ),
        }
    }

    /// The underlying registration entry.
    #[must_use]
    pub fn entry(&self) -> &RegistrationEntry {
        &self.entry
    }
}

impl ViewConverter for TypedConverter {
    fn view(&self) -> &ViewId {
        self.entry.view()
    }

    fn label(&self) -> &str {
        self.entry.value_type().name()
    }

    fn create_value(&self, block: &Block, raw: &RawNode) -> Result<Box<dyn ControlValue>> {
        self.entry.create_value(block, raw)
    }

    fn create_config(
        &self,
        editor: &EditorDefinition,
        raw: &RawNode,
    ) -> Result<Option<Box<dyn EditorConfig>>> {
        self.entry.create_config(editor, raw)
    }

    fn create_wrapper(&self, block: &Block) -> Result<ControlWrapper> {
        self.entry.create_wrapper(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{MacroValue, RichTextConfig, RichTextValue};
    use crate::converter::Converter;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_typed_converter_value() {
        let converter = TypedConverter::new::<MacroValue>("macro");
        let block = Block::new(
            "Macro",
            json!({"macroAlias": "latestNews", "macroParamsDictionary": {"count": 3}}),
        );

        let value = converter.try_convert_value(&block, block.value()).unwrap();
        let value = value.downcast_ref::<MacroValue>().unwrap();
        assert_eq!(value.alias, "latestNews");
        assert_eq!(value.parameters["count"], 3);
    }

    #[test]
    fn test_typed_converter_without_config_type() {
        let converter = TypedConverter::new::<MacroValue>("macro");
        let editor = EditorDefinition::new("macro").with_config(json!({"anything": true}));
        assert!(converter.try_convert_config(&editor, &editor.config).is_none());
    }

    #[test]
    fn test_typed_converter_with_config() {
        let converter = TypedConverter::with_config::<RichTextValue, RichTextConfig>("rte");
        let editor = Arc::new(EditorDefinition::new("rte").with_config(json!({"toolbar": ["bold"]})));

        let config = converter.try_convert_config(&editor, &editor.config).unwrap();
        assert_eq!(
            config.downcast_ref::<RichTextConfig>().map(|c| c.toolbar.len()),
            Some(1)
        );

        let block = Block::with_editor(editor, json!("<p>Hi</p>"));
        let wrapper = converter.try_wrap(&block).unwrap();
        assert!(wrapper.value_as::<RichTextValue>().is_some());
        assert!(wrapper.config_as::<RichTextConfig>().is_some());
    }

    #[test]
    fn test_typed_converter_other_view() {
        let converter = TypedConverter::new::<MacroValue>("macro");
        let block = Block::new("textstring", json!("hello"));
        assert!(converter.try_convert_value(&block, block.value()).is_none());
    }

    #[test]
    fn test_typed_converter_label() {
        let converter = TypedConverter::new::<MacroValue>("macro");
        assert!(converter.name().ends_with("MacroValue"));
    }
}
