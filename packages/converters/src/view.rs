//! Case-insensitive view identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identifier of an editor view, such as `textstring` or `rte`.
///
/// Equality and hashing use a Unicode case-folded form of the identifier, so
/// `TextString` and `textstring` are the same key. The original spelling is
/// kept for display and logging.
///
/// A blank identifier is a valid value but never [`matches`](Self::matches)
/// anything, including another blank identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ViewId {
    raw: String,
    folded: String,
}

impl ViewId {
    /// Create a view identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = fold(&raw);
        Self { raw, folded }
    }

    /// The identifier as originally spelled.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The case-folded lookup key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.folded
    }

    /// Whether the identifier is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Case-insensitive match. Blank identifiers never match.
    #[must_use]
    pub fn matches(&self, other: &ViewId) -> bool {
        !self.is_blank() && !other.is_blank() && self.folded == other.folded
    }

    /// Whether `needle` occurs in this identifier, ignoring case.
    ///
    /// Useful for converters that claim every view under a plugin path.
    #[must_use]
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        if self.is_blank() || needle.trim().is_empty() {
            return false;
        }
        self.folded.contains(&fold(needle))
    }
}

/// Case-fold a view identifier into its lookup key.
///
/// Folds one character at a time through its upper-case form, so the result
/// does not depend on the position of a character in the word.
pub(crate) fn fold(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

impl PartialEq for ViewId {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for ViewId {}

impl Hash for ViewId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for ViewId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ViewId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&ViewId> for ViewId {
    fn from(view: &ViewId) -> Self {
        view.clone()
    }
}

impl From<ViewId> for String {
    fn from(view: ViewId) -> Self {
        view.raw
    }
}
