//! Registry of typed converters keyed by view identifier.
//!
//! The registry is filled exactly once by [`discover`] from a
//! [`PluginManifest`], sealed, and then shared read-only through an `Arc`.
//! Each entry carries the constructors of its value and config types and a
//! wrapper factory built at registration time.

mod core;
pub(crate) mod descriptor;
mod discovery;

pub use self::core::{RegistrationEntry, Registry, WrapperFactory};
pub use descriptor::{ConfigCtor, TypeCatalog, TypeDescriptor, ValueCtor};
pub use discovery::{discover, Candidate, PluginManifest};
