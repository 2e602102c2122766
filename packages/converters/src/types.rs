//! Blocks and editor definitions handed to converters.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::raw::RawNode;
use crate::view::ViewId;

/// Static definition of an editor type.
///
/// Shared by every block placed with that editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorDefinition {
    /// Alias of the editor, unique within the host.
    #[serde(default)]
    pub alias: String,

    /// Human-readable name.
    #[serde(default)]
    pub name: String,

    /// View identifier selecting the converter.
    pub view: ViewId,

    /// Raw editor configuration.
    #[serde(default)]
    pub config: RawNode,
}

impl EditorDefinition {
    /// Create an editor definition with a view and no configuration.
    #[must_use]
    pub fn new(view: impl Into<ViewId>) -> Self {
        Self {
            alias: String::new(),
            name: String::new(),
            view: view.into(),
            config: RawNode::Null,
        }
    }

    /// Set the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the raw configuration.
    #[must_use]
    pub fn with_config(mut self, config: RawNode) -> Self {
        self.config = config;
        self
    }
}

/// One editable unit on a page.
///
/// The view identifier of a block is the view of its editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    editor: Arc<EditorDefinition>,
    value: RawNode,
}

impl Block {
    /// Create a block for a bare view identifier.
    #[must_use]
    pub fn new(view: impl Into<ViewId>, value: RawNode) -> Self {
        Self::with_editor(Arc::new(EditorDefinition::new(view)), value)
    }

    /// Create a block placed with a shared editor definition.
    #[must_use]
    pub fn with_editor(editor: Arc<EditorDefinition>, value: RawNode) -> Self {
        Self { editor, value }
    }

    /// View identifier of the block's editor.
    #[must_use]
    pub fn view(&self) -> &ViewId {
        &self.editor.view
    }

    /// The editor definition.
    #[must_use]
    pub fn editor(&self) -> &EditorDefinition {
        &self.editor
    }

    /// The raw value payload.
    #[must_use]
    pub fn value(&self) -> &RawNode {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_view_comes_from_editor() {
        let block = Block::new("TextString", json!("hello"));
        assert_eq!(block.view().as_str(), "TextString");
        assert_eq!(block.editor().config, RawNode::Null);
    }

    #[test]
    fn test_blocks_share_editor() {
        let editor = Arc::new(
            EditorDefinition::new("rte")
                .with_alias("rte")
                .with_config(json!({"toolbar": ["bold"]})),
        );
        let first = Block::with_editor(Arc::clone(&editor), json!("<p>a</p>"));
        let second = Block::with_editor(editor, json!("<p>b</p>"));
        assert_eq!(first.editor(), second.editor());
    }

    #[test]
    fn test_editor_definition_deserialize() {
        let editor: EditorDefinition = serde_json::from_value(json!({
            "alias": "headline",
            "name": "Headline",
            "view": "textstring",
            "config": {"style": "font-size: 36px", "markup": "<h1>#value#</h1>"}
        }))
        .unwrap();

        assert_eq!(editor.alias, "headline");
        assert!(editor.view.matches(&ViewId::new("TEXTSTRING")));
        assert_eq!(editor.config["markup"], "<h1>#value#</h1>");
    }

    #[test]
    fn test_editor_definition_config_defaults_to_null() {
        let editor: EditorDefinition = serde_json::from_value(json!({"view": "macro"})).unwrap();
        assert_eq!(editor.config, RawNode::Null);
    }
}
