//! Configuration constants, validation, and dispatcher settings.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DiscoveryError, DiscoveryResult};

/// View identifier of the built-in single-line text editor.
pub const TEXTSTRING_VIEW: &str = "textstring";

/// View identifier of the built-in macro editor.
pub const MACRO_VIEW: &str = "macro";

/// View identifier of the built-in rich text editor.
pub const RICH_TEXT_VIEW: &str = "rte";

/// View identifier pattern: no control characters and no surrounding
/// whitespace. Paths such as `/App_Plugins/Foo/editor.html` are allowed.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VIEW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\p{Cc}](?:[^\p{Cc}]*[^\s\p{Cc}])?$").expect("valid regex")
});

/// Validate a view identifier used in a registration.
///
/// # Examples
/// ```
/// use griddata_converters::config::validate_view_identifier;
///
/// assert!(validate_view_identifier("textstring").is_ok());
/// assert!(validate_view_identifier("/App_Plugins/Grid/editor.html").is_ok());
/// assert!(validate_view_identifier("  ").is_err());
/// ```
///
/// # Errors
/// Returns `InvalidViewIdentifier` if the identifier is blank, has leading or
/// trailing whitespace, or contains control characters.
pub fn validate_view_identifier(view: &str) -> DiscoveryResult<()> {
    if VIEW_PATTERN.is_match(view) {
        Ok(())
    } else {
        Err(DiscoveryError::InvalidViewIdentifier(view.to_string()))
    }
}

/// Position of the registry-backed converter in the dispatch chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchOrder {
    /// Hand-written converters are consulted before the registry.
    #[default]
    ExplicitFirst,
    /// The registry is consulted before hand-written converters.
    RegistryFirst,
}

/// Dispatcher settings, usually read from the host's YAML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    #[serde(default)]
    pub order: DispatchOrder,
}

impl DispatcherConfig {
    /// Parse settings from YAML.
    ///
    /// # Errors
    /// Returns `Yaml` if the document is malformed.
    pub fn from_yaml(yaml: &str) -> DiscoveryResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_view_identifier() {
        assert!(validate_view_identifier("textstring").is_ok());
        assert!(validate_view_identifier("a").is_ok());
        assert!(validate_view_identifier("media picker").is_ok());
        assert!(validate_view_identifier("/App_Plugins/Skybrud/Views/Gallery.html").is_ok());

        assert!(validate_view_identifier("").is_err());
        assert!(validate_view_identifier("   ").is_err());
        assert!(validate_view_identifier(" rte").is_err());
        assert!(validate_view_identifier("rte\n").is_err());
        assert!(validate_view_identifier("r\u{0007}te").is_err());
    }

    #[test]
    fn test_dispatcher_config_default() {
        assert_eq!(DispatcherConfig::default().order, DispatchOrder::ExplicitFirst);
    }

    #[test]
    fn test_dispatcher_config_from_yaml() {
        let config = DispatcherConfig::from_yaml("order: registry-first\n").unwrap();
        assert_eq!(config.order, DispatchOrder::RegistryFirst);

        let config = DispatcherConfig::from_yaml("{}").unwrap();
        assert_eq!(config.order, DispatchOrder::ExplicitFirst);
    }

    #[test]
    fn test_dispatcher_config_rejects_unknown_order() {
        let err = DispatcherConfig::from_yaml("order: random\n").unwrap_err();
        assert!(matches!(err, DiscoveryError::Yaml(_)));
    }
}
