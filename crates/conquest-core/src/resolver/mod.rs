//! Resolver module: turns dice into state changes.
//!
//! The [`CombatResolver`] is the only code that mutates territory ownership
//! and troop counts after setup. It receives exclusive access to exactly two
//! territories per battle and reports what happened in a [`BattleReport`].
//!
//! # Invariants
//!
//! - A captured territory never ends with 0 troops
//! - A repelled attack never changes the defender
//! - An attacker with 0 troops draws no dice and changes nothing
//! - Given the same dice sequence the result is identical

mod combat;

pub use combat::CombatResolver;

use serde::{Deserialize, Serialize};

use crate::territory::OwnerLabel;

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// The attacker won and moved `transferred` troops into the defender.
    Captured {
        /// Troops moved from the attacker into the conquered territory.
        transferred: u32,
    },
    /// The defender held (ties included); the attacker lost `lost` troops.
    Repelled {
        /// Troops removed from the attacker (0 or 1).
        lost: u32,
    },
}

/// Result of one resolved battle.
///
/// Carries both rolls plus the post-battle `(attacker troops, defender
/// owner, defender troops)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    /// The attacker's die.
    pub attack_roll: u8,
    /// The defender's die.
    pub defense_roll: u8,
    /// Capture or repel.
    pub outcome: BattleOutcome,
    /// Attacker garrison after the battle.
    pub attacker_troops_after: u32,
    /// Defender owner after the battle.
    pub defender_owner_after: OwnerLabel,
    /// Defender garrison after the battle.
    pub defender_troops_after: u32,
}

impl BattleReport {
    /// Returns true when the defender changed hands.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self.outcome, BattleOutcome::Captured { .. })
    }
}
