//! Error taxonomy for setup and turn-level failures.
//!
//! Turn-level variants ([`GameError::is_recoverable`]) never corrupt the
//! registry: the rejected operation leaves every territory untouched and the
//! caller simply asks for a new selection.

use thiserror::Error;

use crate::territory::TerritoryId;

/// Everything that can go wrong while building or playing a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The attacking territory has no troops left.
    #[error("territory {attacker} has no troops to attack with")]
    InsufficientTroops {
        /// The territory that tried to attack.
        attacker: TerritoryId,
    },
    /// A selection does not name a registered territory.
    #[error("territory {} is out of range (registry holds {len})", .index.saturating_add(1))]
    IndexOutOfRange {
        /// The rejected 0-based index.
        index: usize,
        /// Number of territories in the registry.
        len: usize,
    },
    /// Attacker and defender are the same territory.
    #[error("territory {0} cannot attack itself")]
    SelfAttack(TerritoryId),
    /// Attacker and defender share an owner.
    #[error("cannot attack a territory of the same color ({owner})")]
    FriendlyFire {
        /// The shared owner label.
        owner: String,
    },
    /// Storage for the registry could not be reserved.
    #[error("failed to allocate storage for {requested} territories")]
    AllocationFailure {
        /// Number of territories requested.
        requested: usize,
    },
    /// Fewer territories than a game needs.
    #[error("at least {min} territories are required, got {got}")]
    TooFewTerritories {
        /// Minimum accepted count.
        min: usize,
        /// Count supplied.
        got: usize,
    },
    /// Troop count below the registration minimum.
    #[error("a territory needs at least 1 troop, got {0}")]
    InvalidTroops(i64),
    /// Owner label is empty after trimming.
    #[error("owner label must not be empty")]
    EmptyOwner,
    /// Mission catalog has no entries to draw from.
    #[error("mission catalog is empty")]
    EmptyMissionCatalog,
    /// Game configured without any player.
    #[error("at least one player is required")]
    NoPlayers,
    /// A scripted die face outside 1..=6.
    #[error("die face {0} is outside 1..=6")]
    InvalidDieFace(u8),
    /// A scripted dice sequence with no faces.
    #[error("scripted dice need at least one face")]
    EmptyDiceScript,
    /// An attack was requested after a mission was completed.
    #[error("the game is already over")]
    GameOver,
}

impl GameError {
    /// Returns true for errors the turn loop recovers from by re-prompting.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientTroops { .. }
                | Self::IndexOutOfRange { .. }
                | Self::SelfAttack(_)
                | Self::FriendlyFire { .. }
        )
    }
}
