//! Game configuration.
//!
//! [`GameConfig`] collects everything that is decided before the first
//! turn: rule variant, seed, player colors, mission catalog and, optionally,
//! a preset map. Every field has a default, so a partial config file only
//! overrides what it names.

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::RuleSet;
use crate::mission::MissionCatalog;
use crate::territory::{OwnerLabel, Territory};

/// One player entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Army color the player controls.
    pub label: String,
}

impl PlayerConfig {
    /// Creates a player entry.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// One preset territory, validated like interactive input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryConfig {
    /// Display name (truncated to 29 characters).
    pub name: String,
    /// Owner label (truncated to 9 characters).
    pub owner: String,
    /// Initial garrison, at least 1.
    pub troops: i64,
}

impl TerritoryConfig {
    /// Registers this entry as a territory.
    ///
    /// # Errors
    ///
    /// Same as [`Territory::register`].
    pub fn to_territory(&self) -> Result<Territory, GameError> {
        Territory::register(&self.name, &self.owner, self.troops)
    }
}

/// Configuration for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rule variant.
    pub rules: RuleSet,
    /// Dice seed; `None` lets the front end choose one.
    pub seed: Option<u64>,
    /// Players in turn-check order.
    pub players: Vec<PlayerConfig>,
    /// Mission sentences to draw from.
    pub missions: Vec<String>,
    /// Preset map; empty means territories are entered interactively.
    pub territories: Vec<TerritoryConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::Missions,
            seed: None,
            players: vec![PlayerConfig::new("vermelho"), PlayerConfig::new("azul")],
            missions: MissionCatalog::DEFAULT_MISSIONS
                .iter()
                .map(|m| (*m).to_owned())
                .collect(),
            territories: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Validated player labels, in order.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoPlayers`] when the list is empty
    /// - [`GameError::EmptyOwner`] for a blank label
    pub fn player_labels(&self) -> Result<Vec<OwnerLabel>, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        self.players
            .iter()
            .map(|p| OwnerLabel::new(&p.label))
            .collect()
    }

    /// The mission catalog.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyMissionCatalog`] when `missions` is empty.
    pub fn catalog(&self) -> Result<MissionCatalog, GameError> {
        MissionCatalog::new(self.missions.iter().cloned())
    }

    /// Registers the preset territories, if any.
    ///
    /// # Errors
    ///
    /// The first registration error, if an entry is invalid.
    pub fn preset_territories(&self) -> Result<Vec<Territory>, GameError> {
        self.territories
            .iter()
            .map(TerritoryConfig::to_territory)
            .collect()
    }
}
