//! Converters that map view identifiers to typed values, configs and wrappers.
//!
//! [`Converter`] is the capability the dispatcher consumes. Most converters
//! implement [`ViewConverter`] instead, which handles view matching and
//! failure containment and leaves only construction to the implementor.

mod handler;
mod registry_backed;
mod typed;

pub use handler::{Converter, ViewConverter};
pub use registry_backed::RegistryConverter;
pub use typed::TypedConverter;
