//! Grid Data Converters
//!
//! Typed conversion of grid blocks. Each block of a grid page is tagged with
//! a view identifier; this library turns the block's raw JSON payload into a
//! typed value, an optional typed editor config, and a wrapper for rendering.
//!
//! The pieces, leaves first:
//! - [`view`]: case-insensitive view identifiers
//! - [`value`]: the `ControlValue` and `EditorConfig` capabilities
//! - [`registry`]: start-up discovery into a sealed, read-only registry
//! - [`converter`]: hand-written, typed and registry-backed converters
//! - [`dispatcher`]: ordered, first-match-wins dispatch over converters
//! - [`builtins`]: text, macro and rich text editors
//!
//! # Example
//!
//! ```
//! use griddata_converters::{default_dispatcher, Block, DispatcherConfig, TextValue};
//! use serde_json::json;
//!
//! let dispatcher = default_dispatcher(&DispatcherConfig::default())?;
//! let block = Block::new("textstring", json!("Hello"));
//!
//! let wrapper = dispatcher.try_wrap(&block).expect("textstring is built in");
//! assert_eq!(wrapper.value_as::<TextValue>().map(TextValue::value), Some("Hello"));
//!
//! // Unknown views are absent, never an error.
//! assert!(dispatcher.try_wrap(&Block::new("unknown", json!({}))).is_none());
//! # Ok::<(), griddata_converters::DiscoveryError>(())
//! ```

pub mod builtins;
pub mod config;
pub mod converter;
pub mod dispatcher;
pub mod error;
pub mod raw;
pub mod registry;
pub mod types;
pub mod value;
pub mod view;
pub mod wrapper;

// Re-export commonly used items
pub use builtins::{
    default_catalog, default_converters, default_dispatcher, default_manifest, macro_converter,
    MacroValue, RichTextConfig, RichTextValue, TextConfig, TextStringConverter, TextValue,
};
pub use config::{validate_view_identifier, DispatchOrder, DispatcherConfig};
pub use converter::{Converter, RegistryConverter, TypedConverter, ViewConverter};
pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use error::{ConvertError, DiscoveryError, DiscoveryResult, Result};
pub use raw::RawNode;
pub use registry::{
    discover, Candidate, PluginManifest, RegistrationEntry, Registry, TypeCatalog, TypeDescriptor,
};
pub use types::{Block, EditorDefinition};
pub use value::{ControlValue, EditorConfig};
pub use view::ViewId;
pub use wrapper::ControlWrapper;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
