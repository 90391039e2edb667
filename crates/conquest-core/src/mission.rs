//! Secret missions and their win conditions.
//!
//! Mission text is free-form prose with a marker keyword embedded in it. The
//! keyword is matched once, when the mission is created, and stored as a
//! [`MissionKind`]:
//!
//! | Marker          | Kind          | Satisfied when                                   |
//! |-----------------|---------------|--------------------------------------------------|
//! | `3territorios`  | `ThreeInARow` | 3+ consecutive registry positions share the owner |
//! | `dominar`       | `Majority`    | owner holds more than `N / 2` territories         |
//! | anything else   | `Unrecognized`| never                                            |
//!
//! "Consecutive" means adjacent positions in the registry, not neighbours on
//! a map; the game has no adjacency data.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::registry::Registry;
use crate::territory::{OwnerLabel, Territory};

/// Marker selecting [`MissionKind::ThreeInARow`].
pub const THREE_IN_A_ROW_MARKER: &str = "3territorios";
/// Marker selecting [`MissionKind::Majority`].
pub const MAJORITY_MARKER: &str = "dominar";
/// Run length required by [`MissionKind::ThreeInARow`].
pub const RUN_LENGTH: usize = 3;

/// Win condition family of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    /// Hold [`RUN_LENGTH`] or more consecutive territories.
    ThreeInARow,
    /// Hold a strict majority of the map.
    Majority,
    /// No known marker; never satisfied.
    Unrecognized,
}

impl MissionKind {
    /// Classifies mission text by substring search.
    ///
    /// `3territorios` takes precedence over `dominar` when both appear.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text.contains(THREE_IN_A_ROW_MARKER) {
            Self::ThreeInARow
        } else if text.contains(MAJORITY_MARKER) {
            Self::Majority
        } else {
            Self::Unrecognized
        }
    }

    /// Evaluates this condition for `owner` over territories in registry order.
    #[must_use]
    pub fn is_satisfied(self, territories: &[Territory], owner: &OwnerLabel) -> bool {
        match self {
            Self::ThreeInARow => longest_run(territories, owner) >= RUN_LENGTH,
            Self::Majority => {
                let owned = territories.iter().filter(|t| t.is_owned_by(owner)).count();
                owned > territories.len() / 2
            }
            Self::Unrecognized => false,
        }
    }
}

/// Length of the longest run of consecutive territories held by `owner`.
fn longest_run(territories: &[Territory], owner: &OwnerLabel) -> usize {
    let mut best = 0;
    let mut current = 0;
    for territory in territories {
        if territory.is_owned_by(owner) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

/// A player's secret objective.
///
/// # Example
///
/// ```
/// use conquest_core::{Mission, MissionKind};
///
/// let mission = Mission::new("Conquistar 3territorios seguidos com a sua cor.");
/// assert_eq!(mission.kind(), MissionKind::ThreeInARow);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mission {
    text: String,
    kind: MissionKind,
}

impl Mission {
    /// Creates a mission, classifying its text once.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = MissionKind::classify(&text);
        Self { text, kind }
    }

    /// The mission sentence shown to the player.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The resolved win condition.
    #[must_use]
    pub fn kind(&self) -> MissionKind {
        self.kind
    }

    /// Returns true when `owner` has completed this mission on `registry`.
    #[must_use]
    pub fn evaluate(&self, registry: &Registry, owner: &OwnerLabel) -> bool {
        self.kind.is_satisfied(registry.territories(), owner)
    }
}

/// The pool missions are drawn from at game start. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionCatalog {
    missions: Vec<String>,
}

impl MissionCatalog {
    /// The catalog shipped with the game.
    pub const DEFAULT_MISSIONS: [&'static str; 5] = [
        "Conquistar 3territorios seguidos com a sua cor.",
        "Dominar (dominar) a maioria dos territorios do mapa.",
        "Conquistar 3territorios consecutivos na mesma regiao.",
        "Dominar (dominar) todos os territorios de uma cor inimiga.",
        "Conquistar 3territorios e mante-los por um turno.",
    ];

    /// Creates a catalog from mission sentences.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyMissionCatalog`] when `missions` is empty.
    pub fn new<I, S>(missions: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let missions: Vec<String> = missions.into_iter().map(Into::into).collect();
        if missions.is_empty() {
            return Err(GameError::EmptyMissionCatalog);
        }
        Ok(Self { missions })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Mission sentences in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.missions
    }

    /// Draws one mission uniformly at random. Draws are with replacement.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Mission {
        let index = rng.gen_range(0..self.missions.len());
        Mission::new(self.missions[index].clone())
    }
}

impl Default for MissionCatalog {
    fn default() -> Self {
        Self {
            missions: Self::DEFAULT_MISSIONS.iter().map(|m| (*m).to_owned()).collect(),
        }
    }
}
