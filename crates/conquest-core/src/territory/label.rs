//! Bounded text values for territory names and owner labels.
//!
//! Both types truncate on construction, counting `char`s rather than bytes so
//! multi-byte input is never split mid-character.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;

/// Keeps at most `max` characters of `raw`.
fn truncate_chars(raw: &str, max: usize) -> &str {
    match raw.char_indices().nth(max) {
        Some((cut, _)) => &raw[..cut],
        None => raw,
    }
}

/// Display name of a territory, at most [`TerritoryName::MAX_CHARS`] characters.
///
/// Names are free text and need not be unique. Surrounding whitespace is
/// stripped before truncation.
///
/// # Example
///
/// ```
/// use conquest_core::TerritoryName;
///
/// let name = TerritoryName::new("  Amazonia  ");
/// assert_eq!(name.as_str(), "Amazonia");
///
/// let long = TerritoryName::new(&"x".repeat(40));
/// assert_eq!(long.as_str().chars().count(), TerritoryName::MAX_CHARS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TerritoryName(String);

impl TerritoryName {
    /// Longest accepted name, in characters.
    pub const MAX_CHARS: usize = 29;

    /// Creates a name, trimming whitespace and truncating to `MAX_CHARS`.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(truncate_chars(raw.trim(), Self::MAX_CHARS).to_owned())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TerritoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TerritoryName {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<TerritoryName> for String {
    fn from(name: TerritoryName) -> Self {
        name.0
    }
}

/// Label of the faction (army color) controlling a territory.
///
/// Always non-empty and at most [`OwnerLabel::MAX_CHARS`] characters. Two
/// territories belong to the same player exactly when their labels compare
/// equal.
///
/// # Example
///
/// ```
/// use conquest_core::OwnerLabel;
///
/// let owner = OwnerLabel::new("vermelho").unwrap();
/// assert_eq!(owner.as_str(), "vermelho");
/// assert!(OwnerLabel::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerLabel(String);

impl OwnerLabel {
    /// Longest accepted label, in characters.
    pub const MAX_CHARS: usize = 9;

    /// Creates a label, trimming whitespace and truncating to `MAX_CHARS`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyOwner`] when nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, GameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GameError::EmptyOwner);
        }
        Ok(Self(truncate_chars(trimmed, Self::MAX_CHARS).to_owned()))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OwnerLabel {
    type Error = GameError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<OwnerLabel> for String {
    fn from(label: OwnerLabel) -> Self {
        label.0
    }
}
