//! Type-erased descriptors of candidate value and config types.

use std::any::type_name;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::Result;
use crate::raw::RawNode;
use crate::types::{Block, EditorDefinition};
use crate::value::{ControlValue, EditorConfig};

/// Constructor of a boxed value, monomorphized for one value type.
pub type ValueCtor = fn(&Block, &RawNode) -> Result<Box<dyn ControlValue>>;

/// Constructor of a boxed config, monomorphized for one config type.
pub type ConfigCtor = fn(&EditorDefinition, &RawNode) -> Result<Box<dyn EditorConfig>>;

pub(crate) fn construct_value<V: ControlValue>(
    block: &Block,
    raw: &RawNode,
) -> Result<Box<dyn ControlValue>> {
    Ok(Box::new(V::from_raw(block, raw)?))
}

pub(crate) fn construct_config<C: EditorConfig>(
    editor: &EditorDefinition,
    raw: &RawNode,
) -> Result<Box<dyn EditorConfig>> {
    Ok(Box::new(C::from_raw(editor, raw)?))
}

/// Description of a type that may be named by a registration.
///
/// A descriptor records which capabilities the type has. A type without the
/// value capability can still be described, so that discovery can reject it
/// with a meaningful error instead of the manifest failing to build.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: Cow<'static, str>,
    value: Option<ValueCtor>,
    config: Option<ConfigCtor>,
}

impl TypeDescriptor {
    /// Describe a typed value.
    #[must_use]
    pub fn value<V: ControlValue>() -> Self {
        Self {
            name: Cow::Borrowed(type_name::<V>()),
            value: Some(construct_value::<V>),
            config: None,
        }
    }

    /// Describe a typed editor config.
    #[must_use]
    pub fn config<C: EditorConfig>() -> Self {
        Self {
            name: Cow::Borrowed(type_name::<C>()),
            value: None,
            config: Some(construct_config::<C>),
        }
    }

    /// Describe a type with no conversion capability.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: Cow::Borrowed(type_name::<T>()),
            value: None,
            config: None,
        }
    }

    /// Override the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Combine capabilities of two descriptors for the same type.
    ///
    /// Capabilities already present on `self` win.
    #[must_use]
    pub fn merge(mut self, other: TypeDescriptor) -> Self {
        self.value = self.value.or(other.value);
        self.config = self.config.or(other.config);
        self
    }

    /// Name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value constructor, if the type is a `ControlValue`.
    #[must_use]
    pub fn value_ctor(&self) -> Option<ValueCtor> {
        self.value
    }

    /// The config constructor, if the type is an `EditorConfig`.
    #[must_use]
    pub fn config_ctor(&self) -> Option<ConfigCtor> {
        self.config
    }
}

/// Named types available to YAML manifests.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<String, TypeDescriptor>,
}

impl TypeCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor under a name, merging with an existing entry.
    pub fn add(&mut self, name: impl Into<String>, descriptor: TypeDescriptor) -> &mut Self {
        let name = name.into();
        let descriptor = descriptor.named(name.clone());
        let merged = match self.types.remove(&name) {
            Some(existing) => existing.merge(descriptor),
            None => descriptor,
        };
        self.types.insert(name, merged);
        self
    }

    /// Add a value type under a name.
    pub fn add_value<V: ControlValue>(&mut self, name: impl Into<String>) -> &mut Self {
        self.add(name, TypeDescriptor::value::<V>())
    }

    /// Add a config type under a name.
    pub fn add_config<C: EditorConfig>(&mut self, name: impl Into<String>) -> &mut Self {
        self.add(name, TypeDescriptor::config::<C>())
    }

    /// Look up a type by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Number of named types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
