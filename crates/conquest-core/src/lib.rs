//! # Conquest Core
//!
//! Rules engine for a turn-based territory conquest game.
//!
//! Players register territories, then repeatedly pick an attacker and a
//! defender. Each battle is settled by two six-sided dice, ownership and troop
//! counts change in place, and under the full rules every player carries a
//! secret mission that is checked after each attack.
//!
//! ## Architecture
//!
//! - **Registry**: fixed-length, ordered storage for every [`Territory`]
//! - **Dice**: injected randomness ([`SeededDice`] for play, [`ScriptedDice`] for tests)
//! - **Resolver**: [`CombatResolver`] turns two rolls into troop/ownership changes
//! - **Missions**: [`Mission`] predicates evaluated against a registry snapshot
//! - **Game**: [`Game`] validates selections, runs battles and reports victory
//!
//! ## Usage
//!
//! ```
//! use conquest_core::{Game, OwnerLabel, Player, Registry, RuleSet, ScriptedDice};
//! use conquest_core::{Territory, TerritoryId};
//!
//! let registry = Registry::new(vec![
//!     Territory::register("X", "red", 5)?,
//!     Territory::register("Y", "blue", 3)?,
//!     Territory::register("Z", "red", 4)?,
//! ])?;
//! let players = vec![Player::new(OwnerLabel::new("red")?, None)];
//! let dice = ScriptedDice::new([6, 1])?;
//! let mut game = Game::new(registry, players, RuleSet::Classic, dice)?;
//!
//! let outcome = game.attack(TerritoryId::new(0), TerritoryId::new(1))?;
//! assert!(outcome.report.is_capture());
//! assert_eq!(game.registry().get(TerritoryId::new(1))?.owner().as_str(), "red");
//! # Ok::<(), conquest_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dice;
pub mod error;
pub mod event;
pub mod game;
pub mod mission;
pub mod registry;
pub mod resolver;
pub mod territory;

#[cfg(test)]
mod tests;

pub use config::{GameConfig, PlayerConfig, TerritoryConfig};
pub use dice::{Dice, ScriptedDice, SeededDice, DIE_FACES};
pub use error::GameError;
pub use event::GameEvent;
pub use game::{Game, Player, RuleSet, TurnOutcome, Victory};
pub use mission::{Mission, MissionCatalog, MissionKind};
pub use registry::Registry;
pub use resolver::{BattleOutcome, BattleReport, CombatResolver};
pub use territory::{OwnerLabel, Territory, TerritoryId, TerritoryName};
