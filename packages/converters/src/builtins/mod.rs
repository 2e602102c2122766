//! Built-in editors: single-line text, macros and rich text.
//!
//! `textstring` has a hand-written converter, `macro` uses a
//! [`TypedConverter`](crate::converter::TypedConverter), and `rte` is
//! registered through the default manifest so that it is served by the
//! registry.

mod macros;
mod rich_text;
mod text;

use std::sync::Arc;

pub use macros::{macro_converter, MacroValue};
pub use rich_text::{RichTextConfig, RichTextValue};
pub use text::{TextConfig, TextStringConverter, TextValue};

use crate::config::{DispatcherConfig, RICH_TEXT_VIEW};
use crate::converter::Converter;
use crate::dispatcher::Dispatcher;
use crate::error::DiscoveryResult;
use crate::registry::{discover, PluginManifest, TypeCatalog};

/// The hand-written converters shipped with the crate.
#[must_use]
pub fn default_converters() -> Vec<Arc<dyn Converter>> {
    vec![
        Arc::new(TextStringConverter::new()),
        Arc::new(macro_converter()),
    ]
}

/// Catalog of the built-in types, by their short names.
#[must_use]
pub fn default_catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    catalog
        .add_value::<TextValue>("TextValue")
        .add_config::<TextConfig>("TextConfig")
        .add_value::<MacroValue>("MacroValue")
        .add_value::<RichTextValue>("RichTextValue")
        .add_config::<RichTextConfig>("RichTextConfig");
    catalog
}

/// Registrations of the built-in types that have no hand-written converter.
#[must_use]
pub fn default_manifest() -> PluginManifest {
    let mut manifest = PluginManifest::new();
    manifest.register_with_config::<RichTextValue, RichTextConfig>(RICH_TEXT_VIEW);
    manifest
}

/// Dispatcher over the built-in converters and the default manifest.
///
/// # Errors
/// Returns a `DiscoveryError` if discovery of the default manifest fails.
pub fn default_dispatcher(config: &DispatcherConfig) -> DiscoveryResult<Dispatcher> {
    let registry = discover(&default_manifest())?;
    Ok(Dispatcher::builder()
        .converters(default_converters())
        .registry(registry)
        .config(config)
        .build())
}
