//! Capabilities of typed values and typed editor configs.

use std::any::Any;
use std::fmt;

use crate::error::Result;
use crate::raw::RawNode;
use crate::types::{Block, EditorDefinition};

/// Access to `Any` for downcasting trait objects.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Typed value of a block.
///
/// Implementors are constructible from the block and its raw payload. The
/// constructor reports malformed payloads as `Err`; callers of the dispatch
/// path only ever see an absent result for those.
pub trait ControlValue: AsAny + fmt::Debug + Send + Sync {
    /// Build the value from a block and its raw payload.
    ///
    /// # Errors
    /// Returns a `ConvertError` if the payload does not have the expected shape.
    fn from_raw(block: &Block, raw: &RawNode) -> Result<Self>
    where
        Self: Sized;

    /// Whether the value holds enough content to be rendered.
    fn is_valid(&self) -> bool {
        true
    }

    /// Plain text used when indexing the block for search.
    fn searchable_text(&self) -> String {
        String::new()
    }
}

impl dyn ControlValue {
    /// Downcast to a concrete value type.
    #[must_use]
    pub fn downcast_ref<T: ControlValue>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Whether the value is of type `T`.
    #[must_use]
    pub fn is<T: ControlValue>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Typed configuration of an editor.
pub trait EditorConfig: AsAny + fmt::Debug + Send + Sync {
    /// Build the config from an editor definition and its raw config payload.
    ///
    /// # Errors
    /// Returns a `ConvertError` if the payload does not have the expected shape.
    fn from_raw(editor: &EditorDefinition, raw: &RawNode) -> Result<Self>
    where
        Self: Sized;
}

impl dyn EditorConfig {
    /// Downcast to a concrete config type.
    #[must_use]
    pub fn downcast_ref<T: EditorConfig>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Whether the config is of type `T`.
    #[must_use]
    pub fn is<T: EditorConfig>(&self) -> bool {
        self.as_any().is::<T>()
    }
}
