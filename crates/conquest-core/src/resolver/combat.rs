//! Dice combat between two territories.
//!
//! The `CombatResolver` handles one battle:
//! - Each side rolls one die
//! - Higher attack roll: the defender is captured
//! - Equal or lower: the attacker loses one troop
//!
//! # Capture
//!
//! The attacker moves half its garrison (rounded down, never less than 1)
//! into the captured territory, which takes the attacker's owner label.

use crate::dice::Dice;
use crate::error::GameError;
use crate::territory::{Territory, TerritoryId};

use super::{BattleOutcome, BattleReport};

/// Resolver for a single attack.
///
/// # Processing Order
///
/// 1. Refuse attackers with no troops (no dice are drawn)
/// 2. Roll the attack die, then the defense die
/// 3. Apply capture or repel
///
/// # Example
///
/// ```
/// use conquest_core::{CombatResolver, ScriptedDice, Territory, TerritoryId};
///
/// let mut attacker = Territory::register("X", "red", 5).unwrap();
/// let mut defender = Territory::register("Y", "blue", 3).unwrap();
/// let mut dice = ScriptedDice::new([6, 1]).unwrap();
///
/// let report = CombatResolver::new()
///     .resolve(TerritoryId::new(0), &mut attacker, &mut defender, &mut dice)
///     .unwrap();
///
/// assert!(report.is_capture());
/// assert_eq!(attacker.troops(), 3);
/// assert_eq!(defender.owner().as_str(), "red");
/// assert_eq!(defender.troops(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatResolver;

impl CombatResolver {
    /// Creates a new combat resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Troops moved into a captured territory: half the attacker, at least 1.
    #[must_use]
    pub fn transfer_for(attacker_troops: u32) -> u32 {
        (attacker_troops / 2).max(1)
    }

    /// Resolves one battle, mutating both territories in place.
    ///
    /// `attacker_id` is only used for error reporting; callers obtain the two
    /// references from [`crate::Registry::pair_mut`], which guarantees they
    /// are distinct.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientTroops`] when the attacker has no
    /// troops. Both territories are left unchanged.
    pub fn resolve<D: Dice + ?Sized>(
        &self,
        attacker_id: TerritoryId,
        attacker: &mut Territory,
        defender: &mut Territory,
        dice: &mut D,
    ) -> Result<BattleReport, GameError> {
        if attacker.troops() < 1 {
            return Err(GameError::InsufficientTroops {
                attacker: attacker_id,
            });
        }

        let attack_roll = dice.roll();
        let defense_roll = dice.roll();

        let outcome = if attack_roll > defense_roll {
            let transferred = Self::transfer_for(attacker.troops());
            attacker.set_troops(attacker.troops() - transferred);
            defender.set_owner(attacker.owner().clone());
            defender.set_troops(transferred);
            BattleOutcome::Captured { transferred }
        } else {
            let lost = u32::from(attacker.troops() > 0);
            attacker.set_troops(attacker.troops() - lost);
            BattleOutcome::Repelled { lost }
        };

        Ok(BattleReport {
            attack_roll,
            defense_roll,
            outcome,
            attacker_troops_after: attacker.troops(),
            defender_owner_after: defender.owner().clone(),
            defender_troops_after: defender.troops(),
        })
    }
}
