//! Ordered dispatch over a collection of converters.
//!
//! The dispatcher asks each converter in turn and returns the first answer.
//! A converter that does not apply returns `None` and the next one is asked;
//! converters after the first answer are never invoked.

use std::fmt;
use std::sync::Arc;

use crate::config::{DispatchOrder, DispatcherConfig};
use crate::converter::{Converter, RegistryConverter};
use crate::raw::RawNode;
use crate::registry::Registry;
use crate::types::{Block, EditorDefinition};
use crate::value::{ControlValue, EditorConfig};
use crate::wrapper::ControlWrapper;

/// Ordered collection of converters, consulted first match wins.
#[derive(Clone, Default)]
pub struct Dispatcher {
    converters: Vec<Arc<dyn Converter>>,
}

impl Dispatcher {
    /// Create a dispatcher over converters in priority order.
    #[must_use]
    pub fn new(converters: Vec<Arc<dyn Converter>>) -> Self {
        Self { converters }
    }

    /// Start building a dispatcher.
    #[must_use]
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// The converters in the order they are consulted.
    #[must_use]
    pub fn converters(&self) -> &[Arc<dyn Converter>] {
        &self.converters
    }

    /// Convert a block's raw value using the first converter that answers.
    #[must_use]
    pub fn try_convert_value(&self, block: &Block, raw: &RawNode) -> Option<Box<dyn ControlValue>> {
        self.first(|converter| converter.try_convert_value(block, raw))
            .map(|(name, value)| {
                tracing::trace!(view = %block.view(), converter = name, "Converted value");
                value
            })
    }

    /// Convert an editor's raw config using the first converter that answers.
    #[must_use]
    pub fn try_convert_config(
        &self,
        editor: &EditorDefinition,
        raw: &RawNode,
    ) -> Option<Box<dyn EditorConfig>> {
        self.first(|converter| converter.try_convert_config(editor, raw))
            .map(|(name, config)| {
                tracing::trace!(view = %editor.view, converter = name, "Converted config");
                config
            })
    }

    /// Wrap a block using the first converter that answers.
    #[must_use]
    pub fn try_wrap(&self, block: &Block) -> Option<ControlWrapper> {
        self.first(|converter| converter.try_wrap(block))
            .map(|(name, wrapper)| {
                tracing::trace!(view = %block.view(), converter = name, "Wrapped block");
                wrapper
            })
    }

    fn first<'a, T>(
        &'a self,
        mut attempt: impl FnMut(&dyn Converter) -> Option<T>,
    ) -> Option<(&'a str, T)> {
        self.converters
            .iter()
            .find_map(|converter| attempt(converter.as_ref()).map(|out| (converter.name(), out)))
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field(
                "converters",
                &self.converters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder that places the registry converter relative to explicit ones.
#[derive(Default)]
pub struct DispatcherBuilder {
    explicit: Vec<Arc<dyn Converter>>,
    registry: Option<Arc<Registry>>,
    order: DispatchOrder,
}

impl DispatcherBuilder {
    /// Add an explicit converter. Explicit converters keep insertion order.
    #[must_use]
    pub fn converter(self, converter: impl Converter + 'static) -> Self {
        self.converter_arc(Arc::new(converter))
    }

    /// Add a shared explicit converter.
    #[must_use]
    pub fn converter_arc(mut self, converter: Arc<dyn Converter>) -> Self {
        self.explicit.push(converter);
        self
    }

    /// Add several shared explicit converters.
    #[must_use]
    pub fn converters(mut self, converters: impl IntoIterator<Item = Arc<dyn Converter>>) -> Self {
        self.explicit.extend(converters);
        self
    }

    /// Serve registered views through a [`RegistryConverter`].
    #[must_use]
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set where the registry converter is placed.
    #[must_use]
    pub fn order(mut self, order: DispatchOrder) -> Self {
        self.order = order;
        self
    }

    /// Apply dispatcher settings.
    #[must_use]
    pub fn config(self, config: &DispatcherConfig) -> Self {
        self.order(config.order)
    }

    /// Build the dispatcher.
    #[must_use]
    pub fn build(self) -> Dispatcher {
        let mut converters = self.explicit;
        if let Some(registry) = self.registry {
            let registry: Arc<dyn Converter> = Arc::new(RegistryConverter::new(registry));
            match self.order {
                DispatchOrder::ExplicitFirst => converters.push(registry),
                DispatchOrder::RegistryFirst => converters.insert(0, registry),
            }
        }

        tracing::debug!(
            converters = converters.len(),
            order = ?self.order,
            "Built converter dispatcher"
        );
        Dispatcher::new(converters)
    }
}
