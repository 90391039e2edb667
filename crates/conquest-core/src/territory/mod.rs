//! Territory records and their identifiers.
//!
//! - [`TerritoryId`]: position of a territory in the registry
//! - [`Territory`]: name, owner and garrison of one map unit
//! - [`TerritoryName`] / [`OwnerLabel`]: bounded text fields
//!
//! # Invariants
//!
//! Every territory has a non-empty owner and a non-negative troop count.
//! Registration demands at least one troop; only repeated lost battles can
//! drain a garrison to zero afterwards.
//!
//! # Example
//!
//! ```
//! use conquest_core::territory::Territory;
//!
//! let t = Territory::register("Brasil", "verde", 3).unwrap();
//! assert_eq!(t.name().as_str(), "Brasil");
//! assert_eq!(t.troops(), 3);
//! assert!(Territory::register("Chile", "verde", 0).is_err());
//! ```

mod label;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use label::{OwnerLabel, TerritoryName};

use crate::error::GameError;

/// Position of a territory inside the registry.
///
/// Stored 0-based; `Display` renders the 1-based number players type at the
/// prompt.
///
/// # Example
///
/// ```
/// use conquest_core::TerritoryId;
///
/// let id = TerritoryId::from_one_based(3).unwrap();
/// assert_eq!(id.index(), 2);
/// assert_eq!(id.to_string(), "3");
/// assert!(TerritoryId::from_one_based(0).is_none());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TerritoryId(usize);

impl TerritoryId {
    /// Creates an identifier from a 0-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Converts a 1-based menu number, rejecting zero.
    #[must_use]
    pub const fn from_one_based(number: usize) -> Option<Self> {
        match number.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }

    /// Returns the 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TerritoryId({})", self.0)
    }
}

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

impl From<usize> for TerritoryId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

/// One unit of the game map.
///
/// Fields are private so the owner/troop invariants can only change through
/// registration and the combat resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    name: TerritoryName,
    owner: OwnerLabel,
    troops: u32,
}

impl Territory {
    /// Creates a territory from already-bounded fields.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTroops`] when `troops` is zero.
    pub fn new(name: TerritoryName, owner: OwnerLabel, troops: u32) -> Result<Self, GameError> {
        if troops < 1 {
            return Err(GameError::InvalidTroops(i64::from(troops)));
        }
        Ok(Self {
            name,
            owner,
            troops,
        })
    }

    /// Validates raw setup input and creates a territory.
    ///
    /// Name and owner are truncated to their bounds; the troop count must be
    /// at least 1.
    ///
    /// # Errors
    ///
    /// - [`GameError::EmptyOwner`] when `owner` is blank
    /// - [`GameError::InvalidTroops`] when `troops < 1`
    pub fn register(name: &str, owner: &str, troops: i64) -> Result<Self, GameError> {
        let owner = OwnerLabel::new(owner)?;
        let troops = u32::try_from(troops)
            .ok()
            .filter(|&t| t >= 1)
            .ok_or(GameError::InvalidTroops(troops))?;
        Self::new(TerritoryName::new(name), owner, troops)
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &TerritoryName {
        &self.name
    }

    /// Returns the controlling owner.
    #[must_use]
    pub fn owner(&self) -> &OwnerLabel {
        &self.owner
    }

    /// Returns the garrison size.
    #[must_use]
    pub fn troops(&self) -> u32 {
        self.troops
    }

    /// Returns true when `owner` controls this territory.
    #[must_use]
    pub fn is_owned_by(&self, owner: &OwnerLabel) -> bool {
        self.owner == *owner
    }

    pub(crate) fn set_troops(&mut self, troops: u32) {
        self.troops = troops;
    }

    pub(crate) fn set_owner(&mut self, owner: OwnerLabel) {
        self.owner = owner;
    }
}
