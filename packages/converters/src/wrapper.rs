//! Render-ready wrapper around a converted block.

use serde::{Serialize, Serializer};

use crate::types::Block;
use crate::value::{ControlValue, EditorConfig};
use crate::view::ViewId;

/// A block together with its typed value and, when the editor declares
/// one, its typed config.
#[derive(Debug)]
pub struct ControlWrapper {
    block: Block,
    value: Box<dyn ControlValue>,
    config: Option<Box<dyn EditorConfig>>,
}

impl ControlWrapper {
    /// Create a wrapper.
    #[must_use]
    pub fn new(
        block: Block,
        value: Box<dyn ControlValue>,
        config: Option<Box<dyn EditorConfig>>,
    ) -> Self {
        Self {
            block,
            value,
            config,
        }
    }

    /// The wrapped block.
    #[must_use]
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// View identifier of the wrapped block.
    #[must_use]
    pub fn view(&self) -> &ViewId {
        self.block.view()
    }

    /// The typed value.
    #[must_use]
    pub fn value(&self) -> &dyn ControlValue {
        self.value.as_ref()
    }

    /// The typed config, if the editor has one.
    #[must_use]
    pub fn config(&self) -> Option<&dyn EditorConfig> {
        self.config.as_deref()
    }

    /// The value as a concrete type.
    #[must_use]
    pub fn value_as<V: ControlValue>(&self) -> Option<&V> {
        self.value().downcast_ref::<V>()
    }

    /// The config as a concrete type.
    #[must_use]
    pub fn config_as<C: EditorConfig>(&self) -> Option<&C> {
        self.config().and_then(|c| c.downcast_ref::<C>())
    }

    /// Whether the wrapped value can be rendered.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.value.is_valid()
    }
}

/// Writes the wrapped block's raw payload, so a converted grid serializes back
/// to the JSON it was read from.
impl Serialize for ControlWrapper {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.block.value().serialize(serializer)
    }
}
