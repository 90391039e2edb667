//! Test helper functions for building maps and games.

use crate::dice::ScriptedDice;
use crate::game::{Game, Player, RuleSet};
use crate::mission::Mission;
use crate::registry::Registry;
use crate::territory::{OwnerLabel, Territory};

// =============================================================================
// Territories and Registries
// =============================================================================

/// Registers one territory from a `(name, owner, troops)` triple.
pub fn territory(name: &str, owner: &str, troops: i64) -> Territory {
    Territory::register(name, owner, troops).unwrap()
}

/// Builds a registry where every territory has `troops` troops and the
/// given owners, in order.
pub fn registry_of(owners: &[&str], troops: i64) -> Registry {
    let territories: Vec<_> = owners
        .iter()
        .enumerate()
        .map(|(i, owner)| territory(&format!("T{}", i + 1), owner, troops))
        .collect();
    Registry::new(territories).unwrap()
}

/// The three-territory map used by the reference scenario:
/// `[ {X, red, 5}, {Y, blue, 3}, {Z, red, 4} ]`.
pub fn reference_map() -> Registry {
    Registry::new(vec![
        territory("X", "red", 5),
        territory("Y", "blue", 3),
        territory("Z", "red", 4),
    ])
    .unwrap()
}

/// Shorthand for an owner label.
pub fn label(owner: &str) -> OwnerLabel {
    OwnerLabel::new(owner).unwrap()
}

// =============================================================================
// Games
// =============================================================================

/// A two-player mission game with scripted dice.
pub fn mission_game(
    registry: Registry,
    red_mission: &str,
    blue_mission: &str,
    rolls: &[u8],
) -> Game<ScriptedDice> {
    let players = vec![
        Player::new(label("red"), Some(Mission::new(red_mission))),
        Player::new(label("blue"), Some(Mission::new(blue_mission))),
    ];
    let dice = ScriptedDice::new(rolls.iter().copied()).unwrap();
    Game::new(registry, players, RuleSet::Missions, dice).unwrap()
}

// =============================================================================
// Inspection
// =============================================================================

/// Troop counts in registry order.
pub fn troops(registry: &Registry) -> Vec<u32> {
    registry.territories().iter().map(Territory::troops).collect()
}

/// Owner labels in registry order.
pub fn owners(registry: &Registry) -> Vec<String> {
    registry
        .territories()
        .iter()
        .map(|t| t.owner().as_str().to_owned())
        .collect()
}
