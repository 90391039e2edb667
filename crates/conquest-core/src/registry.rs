//! Registry module holding the game map.
//!
//! The Registry is the single owner of every [`Territory`] for the lifetime
//! of a game. It provides:
//! - Fixed-length storage in registration order (no spawn/despawn after setup)
//! - Checked indexed access that reports [`GameError::IndexOutOfRange`]
//! - Attack validation (range, self-attack, friendly fire)
//! - A split borrow handing out exactly two territories for one battle
//!
//! # Example
//!
//! ```
//! use conquest_core::{Registry, Territory, TerritoryId};
//!
//! let registry = Registry::new(vec![
//!     Territory::register("A", "red", 2).unwrap(),
//!     Territory::register("B", "blue", 2).unwrap(),
//! ]).unwrap();
//!
//! assert_eq!(registry.len(), 2);
//! assert!(registry.validate_attack(TerritoryId::new(0), TerritoryId::new(1)).is_ok());
//! assert!(registry.validate_attack(TerritoryId::new(0), TerritoryId::new(0)).is_err());
//! ```

use serde::Serialize;

use crate::error::GameError;
use crate::territory::{OwnerLabel, Territory, TerritoryId};

/// Fixed-size, ordered collection of all territory state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registry {
    territories: Vec<Territory>,
}

impl Registry {
    /// Smallest map a game can be played on.
    pub const MIN_TERRITORIES: usize = 2;

    /// Reserves storage for `count` territories before they are registered.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AllocationFailure`] when the storage cannot be
    /// reserved.
    pub fn reserve(count: usize) -> Result<Vec<Territory>, GameError> {
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(count)
            .map_err(|_| GameError::AllocationFailure { requested: count })?;
        Ok(storage)
    }

    /// Builds a registry from registered territories.
    ///
    /// The territory count is fixed from here on.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::TooFewTerritories`] for fewer than
    /// [`Self::MIN_TERRITORIES`].
    pub fn new(territories: Vec<Territory>) -> Result<Self, GameError> {
        if territories.len() < Self::MIN_TERRITORIES {
            return Err(GameError::TooFewTerritories {
                min: Self::MIN_TERRITORIES,
                got: territories.len(),
            });
        }

        tracing::debug!(territories = territories.len(), "registry created");
        Ok(Self { territories })
    }

    /// Returns the number of territories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Always false: a registry holds at least [`Self::MIN_TERRITORIES`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Returns the territory at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] for an unknown id.
    pub fn get(&self, id: TerritoryId) -> Result<&Territory, GameError> {
        self.territories
            .get(id.index())
            .ok_or(GameError::IndexOutOfRange {
                index: id.index(),
                len: self.len(),
            })
    }

    /// Territories in registry order.
    #[must_use]
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Iterates `(id, territory)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> + '_ {
        self.territories
            .iter()
            .enumerate()
            .map(|(index, territory)| (TerritoryId::new(index), territory))
    }

    /// Counts the territories controlled by `owner`.
    #[must_use]
    pub fn owned_by(&self, owner: &OwnerLabel) -> usize {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(owner))
            .count()
    }

    fn check_range(&self, id: TerritoryId) -> Result<(), GameError> {
        self.get(id).map(|_| ())
    }

    /// Checks that `attacker` may attack `defender`.
    ///
    /// Rules are applied in order: both ids in range, ids distinct, owners
    /// distinct. The registry is never modified.
    ///
    /// # Errors
    ///
    /// [`GameError::IndexOutOfRange`], [`GameError::SelfAttack`] or
    /// [`GameError::FriendlyFire`].
    pub fn validate_attack(
        &self,
        attacker: TerritoryId,
        defender: TerritoryId,
    ) -> Result<(), GameError> {
        self.check_range(attacker)?;
        self.check_range(defender)?;
        if attacker == defender {
            return Err(GameError::SelfAttack(attacker));
        }
        let attacking = &self.territories[attacker.index()];
        let defending = &self.territories[defender.index()];
        if attacking.owner() == defending.owner() {
            return Err(GameError::FriendlyFire {
                owner: attacking.owner().as_str().to_owned(),
            });
        }
        Ok(())
    }

    /// Borrows the attacker and the defender mutably at the same time.
    ///
    /// The pair is validated with [`Self::validate_attack`] first, so the
    /// two references always point at distinct, hostile territories.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate_attack`].
    pub fn pair_mut(
        &mut self,
        attacker: TerritoryId,
        defender: TerritoryId,
    ) -> Result<(&mut Territory, &mut Territory), GameError> {
        self.validate_attack(attacker, defender)?;
        let (a, d) = (attacker.index(), defender.index());
        if a < d {
            let (head, tail) = self.territories.split_at_mut(d);
            Ok((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(a);
            Ok((&mut tail[0], &mut head[d]))
        }
    }
}
