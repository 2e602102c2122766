//! Error types for conversion and discovery.
//!
//! Two separate enums keep the two failure classes apart: `ConvertError` is
//! recoverable and only ever surfaces as a log entry plus an absent result,
//! while `DiscoveryError` is fatal and aborts start-up.

use thiserror::Error;

/// Failure to build a typed value or config from a raw payload.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The payload has a different JSON shape than expected.
    #[error("Unexpected payload shape: expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    /// A required field is missing from an object payload.
    #[error("Missing required field '{0}'")]
    MissingField(String),

    /// A field is present but holds the wrong kind of value.
    #[error("Invalid field '{field}': expected {expected}, found {found}")]
    InvalidField {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Serde could not map the payload onto the target type.
    #[error("Payload deserialization failed: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The payload is well-formed but semantically invalid.
    #[error("Invalid payload: {0}")]
    Invalid(String),
}

/// Fatal configuration error raised while populating the registry.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The view identifier is blank or contains control characters.
    #[error("Invalid view identifier: '{0}'")]
    InvalidViewIdentifier(String),

    /// Two candidates claim the same view identifier.
    #[error("View '{0}' is already registered")]
    DuplicateView(String),

    /// The value type cannot be constructed from a block payload.
    #[error("Type {type_name} registered for view '{view}' does not implement ControlValue")]
    MissingValueCapability { view: String, type_name: String },

    /// The config type cannot be constructed from an editor payload.
    #[error("Type {type_name} registered as config for view '{view}' does not implement EditorConfig")]
    MissingConfigCapability { view: String, type_name: String },

    /// A manifest names a type that is not in the catalog.
    #[error("Unknown type '{type_name}' referenced by view '{view}'")]
    UnknownType { view: String, type_name: String },

    /// Registration was attempted after discovery finished.
    #[error("Registry is sealed; cannot register view '{0}'")]
    RegistrySealed(String),

    /// The YAML manifest or configuration could not be parsed.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Result type alias for discovery operations.
pub type DiscoveryResult<T> = std::result::Result<T, DiscoveryError>;
