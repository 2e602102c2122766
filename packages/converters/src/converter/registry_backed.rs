//! Converter backed by the discovered registry.

use std::sync::Arc;

use super::handler::{contain, Converter};
use crate::raw::RawNode;
use crate::registry::Registry;
use crate::types::{Block, EditorDefinition};
use crate::value::{ControlValue, EditorConfig};
use crate::wrapper::ControlWrapper;

/// Converter that answers for every view identifier in the registry.
#[derive(Debug, Clone)]
pub struct RegistryConverter {
    registry: Arc<Registry>,
}

impl RegistryConverter {
    /// Create a converter over a sealed registry.
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Converter for RegistryConverter {
    fn name(&self) -> &str {
        "registry"
    }

    fn try_convert_value(&self, block: &Block, raw: &RawNode) -> Option<Box<dyn ControlValue>> {
        let entry = self.registry.get(block.view())?;
        contain(
            entry.value_type().name(),
            block.view(),
            "value",
            entry.create_value(block, raw),
        )
    }

    fn try_convert_config(
        &self,
        editor: &EditorDefinition,
        raw: &RawNode,
    ) -> Option<Box<dyn EditorConfig>> {
        let entry = self.registry.get(&editor.view)?;
        contain(
            entry.value_type().name(),
            &editor.view,
            "config",
            entry.create_config(editor, raw),
        )
        .flatten()
    }

    fn try_wrap(&self, block: &Block) -> Option<ControlWrapper> {
        let entry = self.registry.get(block.view())?;
        contain(
            entry.value_type().name(),
            block.view(),
            "wrapper",
            entry.create_wrapper(block),
        )
    }
}
