//! Registry mapping view identifiers to registration entries.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::descriptor::{ConfigCtor, TypeDescriptor, ValueCtor};
use crate::error::{DiscoveryError, DiscoveryResult, Result};
use crate::raw::RawNode;
use crate::types::{Block, EditorDefinition};
use crate::value::{ControlValue, EditorConfig};
use crate::view::{fold, ViewId};
use crate::wrapper::ControlWrapper;

/// Cached closure that wraps a block for one registered type pair.
pub type WrapperFactory = Arc<dyn Fn(&Block) -> Result<ControlWrapper> + Send + Sync>;

/// Build the wrapper closure for a value type and optional config type.
///
/// The closure captures the monomorphized constructors, so calling it does
/// no type resolution.
pub(crate) fn wrapper_factory(value: ValueCtor, config: Option<ConfigCtor>) -> WrapperFactory {
    match config {
        None => Arc::new(move |block: &Block| -> Result<ControlWrapper> {
            let typed = value(block, block.value())?;
            Ok(ControlWrapper::new(block.clone(), typed, None))
        }),
        Some(config) => Arc::new(move |block: &Block| -> Result<ControlWrapper> {
            let typed = value(block, block.value())?;
            let editor = block.editor();
            let typed_config = config(editor, &editor.config)?;
            Ok(ControlWrapper::new(block.clone(), typed, Some(typed_config)))
        }),
    }
}

/// Registration of one view identifier.
#[derive(Clone)]
pub struct RegistrationEntry {
    view: ViewId,
    value_type: TypeDescriptor,
    config_type: Option<TypeDescriptor>,
    value: ValueCtor,
    config: Option<ConfigCtor>,
    wrapper: WrapperFactory,
}

impl RegistrationEntry {
    /// Assemble an entry from already validated constructors.
    pub(crate) fn assemble(
        view: ViewId,
        value_type: TypeDescriptor,
        value: ValueCtor,
        config: Option<(TypeDescriptor, ConfigCtor)>,
    ) -> Self {
        let config_ctor = config.as_ref().map(|(_, ctor)| *ctor);
        Self {
            view,
            value_type,
            config_type: config.map(|(descriptor, _)| descriptor),
            value,
            config: config_ctor,
            wrapper: wrapper_factory(value, config_ctor),
        }
    }

    /// The registered view identifier.
    #[must_use]
    pub fn view(&self) -> &ViewId {
        &self.view
    }

    /// Descriptor of the value type.
    #[must_use]
    pub fn value_type(&self) -> &TypeDescriptor {
        &self.value_type
    }

    /// Descriptor of the config type, if any.
    #[must_use]
    pub fn config_type(&self) -> Option<&TypeDescriptor> {
        self.config_type.as_ref()
    }

    /// Build the typed value for a block.
    ///
    /// # Errors
    /// Propagates the value type's construction error.
    pub fn create_value(&self, block: &Block, raw: &RawNode) -> Result<Box<dyn ControlValue>> {
        (self.value)(block, raw)
    }

    /// Build the typed config for an editor.
    ///
    /// Returns `Ok(None)` when the entry has no config type.
    ///
    /// # Errors
    /// Propagates the config type's construction error.
    pub fn create_config(
        &self,
        editor: &EditorDefinition,
        raw: &RawNode,
    ) -> Result<Option<Box<dyn EditorConfig>>> {
        self.config.map(|ctor| ctor(editor, raw)).transpose()
    }

    /// Wrap a block using the cached wrapper factory.
    ///
    /// # Errors
    /// Propagates value or config construction errors.
    pub fn create_wrapper(&self, block: &Block) -> Result<ControlWrapper> {
        (self.wrapper)(block)
    }
}

impl fmt::Debug for RegistrationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationEntry")
            .field("view", &self.view)
            .field("value_type", &self.value_type.name())
            .field("config_type", &self.config_type.as_ref().map(TypeDescriptor::name))
            .finish()
    }
}

/// Registry of view identifiers.
///
/// Filled during discovery, then sealed. A sealed registry rejects further
/// registrations and is read concurrently through an `Arc`.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, RegistrationEntry>,
    sealed: bool,
}

impl Registry {
    /// Create a new empty, unsealed registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry under its view identifier.
    ///
    /// # Errors
    /// Returns `RegistrySealed` after [`seal`](Self::seal) and `DuplicateView`
    /// if the view identifier is already present in any casing.
    pub fn register(&mut self, entry: RegistrationEntry) -> DiscoveryResult<()> {
        if self.sealed {
            return Err(DiscoveryError::RegistrySealed(entry.view.to_string()));
        }
        if self.entries.contains_key(entry.view.key()) {
            return Err(DiscoveryError::DuplicateView(entry.view.to_string()));
        }
        self.entries.insert(entry.view.key().to_string(), entry);
        Ok(())
    }

    /// Freeze the registry.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Whether the registry has been sealed.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Look up the entry for a view identifier.
    #[must_use]
    pub fn get(&self, view: &ViewId) -> Option<&RegistrationEntry> {
        if view.is_blank() {
            return None;
        }
        self.entries.get(view.key())
    }

    /// Look up the entry for a view identifier given as a string.
    #[must_use]
    pub fn lookup(&self, view: &str) -> Option<&RegistrationEntry> {
        if view.trim().is_empty() {
            return None;
        }
        self.entries.get(&fold(view))
    }

    /// Check if a view identifier is registered.
    #[must_use]
    pub fn contains(&self, view: &str) -> bool {
        self.lookup(view).is_some()
    }

    /// Number of registered views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
