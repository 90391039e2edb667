//! Game module with the turn loop rules.
//!
//! The `Game` struct owns the registry, the players and the dice, and runs
//! one attack at a time:
//!
//! 1. **VALIDATE**: reject out-of-range, self and same-color selections
//! 2. **RESOLVE**: roll the dice and mutate the two territories
//! 3. **RECORD**: append battle/capture events to the log
//! 4. **CHECK**: evaluate missions in player order; the first success wins
//!
//! A rejected attack leaves every territory untouched and does not count as
//! a turn.
//!
//! # Example
//!
//! ```
//! use conquest_core::{Game, GameConfig, Mission, OwnerLabel, Player, Registry, RuleSet};
//! use conquest_core::{ScriptedDice, Territory, TerritoryId};
//!
//! let registry = Registry::new(vec![
//!     Territory::register("A", "red", 4).unwrap(),
//!     Territory::register("B", "blue", 1).unwrap(),
//!     Territory::register("C", "red", 4).unwrap(),
//! ]).unwrap();
//! let players = vec![
//!     Player::new(OwnerLabel::new("red").unwrap(), Some(Mission::new("3territorios"))),
//!     Player::new(OwnerLabel::new("blue").unwrap(), Some(Mission::new("dominar"))),
//! ];
//! let dice = ScriptedDice::new([5, 2]).unwrap();
//! let mut game = Game::new(registry, players, RuleSet::Missions, dice).unwrap();
//!
//! let outcome = game.attack(TerritoryId::new(0), TerritoryId::new(1)).unwrap();
//! let victory = outcome.victory.unwrap();
//! assert_eq!(victory.label.as_str(), "red");
//! assert!(game.is_over());
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::dice::{Dice, SeededDice};
use crate::error::GameError;
use crate::event::{EventLog, GameEvent};
use crate::mission::Mission;
use crate::registry::Registry;
use crate::resolver::{BattleReport, CombatResolver};
use crate::territory::{OwnerLabel, Territory, TerritoryId};

// =============================================================================
// Rules, Players and Outcomes
// =============================================================================

/// Rule variant of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Attacks only; the game ends when the players quit.
    Classic,
    /// Every player draws a secret mission; completing it wins.
    #[default]
    Missions,
}

/// A participant: an army color plus an optional secret mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    label: OwnerLabel,
    mission: Option<Mission>,
}

impl Player {
    /// Creates a player.
    #[must_use]
    pub fn new(label: OwnerLabel, mission: Option<Mission>) -> Self {
        Self { label, mission }
    }

    /// The army color this player controls.
    #[must_use]
    pub fn label(&self) -> &OwnerLabel {
        &self.label
    }

    /// The player's mission, if the rules assign one.
    #[must_use]
    pub fn mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    /// Returns true when this player's mission holds on `registry`.
    #[must_use]
    pub fn has_completed_mission(&self, registry: &Registry) -> bool {
        self.mission
            .as_ref()
            .is_some_and(|m| m.evaluate(registry, &self.label))
    }
}

/// The end of a game under mission rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Victory {
    /// Position of the winner in player order (0-based).
    pub player: usize,
    /// Winner's army color.
    pub label: OwnerLabel,
    /// The completed mission.
    pub mission: Mission,
}

/// Result of one accepted attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// What the dice decided.
    pub report: BattleReport,
    /// Set when this turn completed a mission.
    pub victory: Option<Victory>,
}

// =============================================================================
// Game
// =============================================================================

/// A running game.
///
/// Generic over the dice so tests can script every roll; play uses
/// [`SeededDice`].
#[derive(Debug, Clone)]
pub struct Game<D: Dice = SeededDice> {
    registry: Registry,
    players: Vec<Player>,
    rules: RuleSet,
    dice: D,
    resolver: CombatResolver,
    events: EventLog,
    turn: u32,
    victory: Option<Victory>,
}

impl<D: Dice> Game<D> {
    /// Creates a game from prepared parts.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPlayers`] when `players` is empty.
    pub fn new(
        registry: Registry,
        players: Vec<Player>,
        rules: RuleSet,
        dice: D,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(Self {
            registry,
            players,
            rules,
            dice,
            resolver: CombatResolver::new(),
            events: EventLog::new(),
            turn: 0,
            victory: None,
        })
    }

    /// Builds a game from config and registered territories.
    ///
    /// Under [`RuleSet::Missions`] each player, in order, draws one mission
    /// from the config catalog using `mission_rng`.
    ///
    /// # Errors
    ///
    /// Registry construction errors, invalid player labels, or an empty
    /// catalog under mission rules.
    pub fn setup<R: Rng + ?Sized>(
        config: &GameConfig,
        territories: Vec<Territory>,
        dice: D,
        mission_rng: &mut R,
    ) -> Result<Self, GameError> {
        let (registry, players) = prepare(config, territories, mission_rng)?;
        Self::new(registry, players, config.rules, dice)
    }

    /// Runs one attack from `attacker` against `defender`.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] after a victory
    /// - [`GameError::IndexOutOfRange`], [`GameError::SelfAttack`],
    ///   [`GameError::FriendlyFire`] for an invalid selection
    /// - [`GameError::InsufficientTroops`] when the attacker is empty
    ///
    /// On error no territory is modified.
    pub fn attack(
        &mut self,
        attacker: TerritoryId,
        defender: TerritoryId,
    ) -> Result<TurnOutcome, GameError> {
        if self.victory.is_some() {
            return Err(GameError::GameOver);
        }

        let (attacking, defending) = self
            .registry
            .pair_mut(attacker, defender)
            .inspect_err(|err| tracing::debug!(%err, "attack rejected"))?;
        let previous_owner = defending.owner().clone();

        let report = self
            .resolver
            .resolve(attacker, attacking, defending, &mut self.dice)
            .inspect_err(|err| tracing::debug!(%err, "attack refused"))?;

        self.turn += 1;
        let turn = self.turn;
        tracing::debug!(
            turn,
            %attacker,
            %defender,
            attack_roll = report.attack_roll,
            defense_roll = report.defense_roll,
            "battle resolved"
        );

        self.events.record(GameEvent::BattleFought {
            turn,
            attacker,
            defender,
            report: report.clone(),
        });
        if report.is_capture() {
            tracing::info!(
                turn,
                territory = %defender,
                from = %previous_owner,
                to = %report.defender_owner_after,
                "territory captured"
            );
            self.events.record(GameEvent::TerritoryCaptured {
                turn,
                territory: defender,
                previous_owner,
                new_owner: report.defender_owner_after.clone(),
            });
        }

        let victory = match self.rules {
            RuleSet::Classic => None,
            RuleSet::Missions => self.check_missions(),
        };
        if let Some(victory) = &victory {
            tracing::info!(turn, player = %victory.label, "mission completed");
            self.events.record(GameEvent::MissionCompleted {
                turn,
                player: victory.player,
                label: victory.label.clone(),
            });
            self.victory = Some(victory.clone());
        }

        Ok(TurnOutcome {
            turn,
            report,
            victory,
        })
    }

    /// Evaluates missions in player order and returns the first winner.
    #[must_use]
    pub fn check_missions(&self) -> Option<Victory> {
        self.players
            .iter()
            .enumerate()
            .find(|(_, p)| p.has_completed_mission(&self.registry))
            .and_then(|(index, p)| {
                p.mission().map(|mission| Victory {
                    player: index,
                    label: p.label().clone(),
                    mission: mission.clone(),
                })
            })
    }

    /// Current map state.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Players in check order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The rule variant in force.
    #[must_use]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Number of resolved attacks so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The victory, once a mission has been completed.
    #[must_use]
    pub fn victory(&self) -> Option<&Victory> {
        self.victory.as_ref()
    }

    /// Returns true once a mission has been completed.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.victory.is_some()
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.take_events()
    }

    /// The dice in use.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }
}

impl Game<SeededDice> {
    /// Builds a game whose mission draws and dice share one generator
    /// seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`Game::setup`].
    pub fn seeded(
        config: &GameConfig,
        territories: Vec<Territory>,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut dice = SeededDice::new(seed);
        let (registry, players) = prepare(config, territories, dice.rng_mut())?;
        Self::new(registry, players, config.rules, dice)
    }
}

// =============================================================================
// Setup Helpers
// =============================================================================

/// Builds the registry and the players shared by every setup path.
fn prepare<R: Rng + ?Sized>(
    config: &GameConfig,
    territories: Vec<Territory>,
    rng: &mut R,
) -> Result<(Registry, Vec<Player>), GameError> {
    let registry = Registry::new(territories)?;
    let players = assign_players(config, rng)?;
    tracing::info!(
        territories = registry.len(),
        rules = ?config.rules,
        "game set up"
    );
    Ok((registry, players))
}

/// Creates the configured players, drawing missions under mission rules.
fn assign_players<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<Player>, GameError> {
    let labels = config.player_labels()?;
    match config.rules {
        RuleSet::Classic => Ok(labels.into_iter().map(|l| Player::new(l, None)).collect()),
        RuleSet::Missions => {
            let catalog = config.catalog()?;
            Ok(labels
                .into_iter()
                .map(|label| {
                    let mission = catalog.draw(rng);
                    tracing::debug!(player = %label, kind = ?mission.kind(), "mission assigned");
                    Player::new(label, Some(mission))
                })
                .collect())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn territories(specs: &[(&str, &str, i64)]) -> Vec<Territory> {
        specs
            .iter()
            .map(|(n, o, t)| Territory::register(n, o, *t).unwrap())
            .collect()
    }

    fn classic(specs: &[(&str, &str, i64)], rolls: &[u8]) -> Game<ScriptedDice> {
        let registry = Registry::new(territories(specs)).unwrap();
        let players = vec![Player::new(OwnerLabel::new("red").unwrap(), None)];
        let dice = ScriptedDice::new(rolls.iter().copied()).unwrap();
        Game::new(registry, players, RuleSet::Classic, dice).unwrap()
    }

    fn with_missions(
        specs: &[(&str, &str, i64)],
        missions: [&str; 2],
        rolls: &[u8],
    ) -> Game<ScriptedDice> {
        let registry = Registry::new(territories(specs)).unwrap();
        let players = vec![
            Player::new(
                OwnerLabel::new("red").unwrap(),
                Some(Mission::new(missions[0])),
            ),
            Player::new(
                OwnerLabel::new("blue").unwrap(),
                Some(Mission::new(missions[1])),
            ),
        ];
        let dice = ScriptedDice::new(rolls.iter().copied()).unwrap();
        Game::new(registry, players, RuleSet::Missions, dice).unwrap()
    }

    mod attack_tests {
        use super::*;

        #[test]
        fn capture_updates_registry_and_turn() {
            let mut game = classic(&[("X", "red", 5), ("Y", "blue", 3)], &[6, 1]);
            let outcome = game.attack(TerritoryId::new(0), TerritoryId::new(1)).unwrap();

            assert_eq!(outcome.turn, 1);
            assert!(outcome.report.is_capture());
            assert!(outcome.victory.is_none());
            let y = game.registry().get(TerritoryId::new(1)).unwrap();
            assert_eq!(y.owner().as_str(), "red");
            assert_eq!(y.troops(), 2);
            assert_eq!(game.turn(), 1);
        }

        #[test]
        fn rejected_selection_is_not_a_turn() {
            let mut game = classic(&[("X", "red", 5), ("Y", "red", 3)], &[6, 1]);
            let before = game.registry().clone();

            assert!(matches!(
                game.attack(TerritoryId::new(0), TerritoryId::new(1)),
                Err(GameError::FriendlyFire { .. })
            ));
            assert_eq!(
                game.attack(TerritoryId::new(1), TerritoryId::new(1)),
                Err(GameError::SelfAttack(TerritoryId::new(1)))
            );
            assert_eq!(
                game.attack(TerritoryId::new(0), TerritoryId::new(2)),
                Err(GameError::IndexOutOfRange { index: 2, len: 2 })
            );

            assert_eq!(game.registry(), &before);
            assert_eq!(game.turn(), 0);
            assert_eq!(game.dice().rolls_served(), 0);
            assert!(game.take_events().is_empty());
        }

        #[test]
        fn drained_attacker_is_refused() {
            let mut game = classic(&[("X", "red", 1), ("Y", "blue", 3)], &[1, 6]);
            game.attack(TerritoryId::new(0), TerritoryId::new(1)).unwrap();
            assert_eq!(game.registry().get(TerritoryId::new(0)).unwrap().troops(), 0);

            let before = game.registry().clone();
            assert_eq!(
                game.attack(TerritoryId::new(0), TerritoryId::new(1)),
                Err(GameError::InsufficientTroops {
                    attacker: TerritoryId::new(0)
                })
            );
            assert_eq!(game.registry(), &before);
            assert_eq!(game.turn(), 1);
        }

        #[test]
        fn classic_rules_never_end() {
            let mut game = classic(
                &[("A", "red", 50), ("B", "blue", 1), ("C", "blue", 1)],
                &[6, 1],
            );
            game.attack(TerritoryId::new(0), TerritoryId::new(1)).unwrap();
            game.attack(TerritoryId::new(0), TerritoryId::new(2)).unwrap();
            assert_eq!(game.registry().owned_by(&OwnerLabel::new("red").unwrap()), 3);
            assert!(!game.is_over());
        }
    }

    mod event_tests {
        use super::*;

        #[test]
        fn capture_records_battle_and_capture() {
            let mut game = classic(&[("X", "red", 5), ("Y", "blue", 3)], &[6, 1]);
            game.attack(TerritoryId::new(0), TerritoryId::new(1)).unwrap();

            let events = game.take_events();
            assert_eq!(events.len(), 2);
            assert!(matches!(events[0], GameEvent::BattleFought { turn: 1, .. }));
            assert!(matches!(
                &events[1],
                GameEvent::TerritoryCaptured { previous_owner, .. } if previous_owner.as_str() == "blue"
            ));
            assert!(game.take_events().is_empty());
        }

        #[test]
        fn repel_records_battle_only() {
            let mut game = classic(&[("X", "red", 5), ("Y", "blue", 3)], &[2, 2]);
            game.attack(TerritoryId::new(0), TerritoryId::new(1)).unwrap();
            let events = game.take_events();
            assert_eq!(events.len(), 1);
        }
    }

    mod mission_tests {
        use super::*;

        #[test]
        fn first_player_checked_first() {
            // Both missions hold after the repelled attack; player order decides.
            let mut game = with_missions(
                &[
                    ("A", "red", 4),
                    ("B", "red", 4),
                    ("C", "red", 4),
                    ("D", "blue", 2),
                    ("E", "blue", 2),
                    ("F", "blue", 2),
                    ("G", "blue", 2),
                ],
                ["3territorios", "dominar"],
                &[1, 6],
            );
            let outcome = game.attack(TerritoryId::new(0), TerritoryId::new(3)).unwrap();
            let victory = outcome.victory.unwrap();
            assert_eq!(victory.player, 0);
            assert_eq!(victory.label.as_str(), "red");
            assert_eq!(victory.mission.text(), "3territorios");
        }

        #[test]
        fn second_player_can_win_on_first_players_attack() {
            let mut game = with_missions(
                &[("A", "red", 1), ("B", "blue", 3), ("C", "blue", 3)],
                ["3territorios", "dominar"],
                &[1, 6],
            );
            // Blue already holds a strict majority; the check runs after any attack.
            let outcome = game.attack(TerritoryId::new(0), TerritoryId::new(1)).unwrap();
            assert_eq!(outcome.victory.unwrap().player, 1);
        }

        #[test]
        fn refused_attack_skips_the_mission_check() {
            // Blue's majority already holds, but an empty attacker fights no battle.
            let mut map = territories(&[("A", "red", 1), ("B", "blue", 3), ("C", "blue", 3)]);
            map[0].set_troops(0);
            let players = vec![
                Player::new(OwnerLabel::new("red").unwrap(), Some(Mission::new("3territorios"))),
                Player::new(OwnerLabel::new("blue").unwrap(), Some(Mission::new("dominar"))),
            ];
            let dice = ScriptedDice::new([6, 1]).unwrap();
            let mut game =
                Game::new(Registry::new(map).unwrap(), players, RuleSet::Missions, dice).unwrap();

            assert_eq!(
                game.attack(TerritoryId::new(0), TerritoryId::new(1)),
                Err(GameError::InsufficientTroops {
                    attacker: TerritoryId::new(0)
                })
            );
            assert!(!game.is_over());
            assert_eq!(game.turn(), 0);
            assert!(game.take_events().is_empty());
        }

        #[test]
        fn no_attacks_after_victory() {
            let mut game = with_missions(
                &[("A", "red", 4), ("B", "blue", 1), ("C", "red", 4)],
                ["3territorios", "dominar"],
                &[5, 2],
            );
            game.attack(TerritoryId::new(0), TerritoryId::new(1)).unwrap();
            assert!(game.is_over());
            assert_eq!(
                game.attack(TerritoryId::new(0), TerritoryId::new(1)),
                Err(GameError::GameOver)
            );
            let events = game.take_events();
            assert!(matches!(
                events.last(),
                Some(GameEvent::MissionCompleted { player: 0, .. })
            ));
        }

        #[test]
        fn unrecognized_missions_never_win() {
            let mut game = with_missions(
                &[("A", "red", 9), ("B", "blue", 1), ("C", "red", 4)],
                ["Sobreviver", "Resistir"],
                &[6, 1],
            );
            game.attack(TerritoryId::new(0), TerritoryId::new(1)).unwrap();
            assert!(game.check_missions().is_none());
            assert!(!game.is_over());
        }
    }

    mod setup_tests {
        use super::*;
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        #[test]
        fn missions_drawn_for_every_player() {
            let config = GameConfig::default();
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            let dice = ScriptedDice::new([3]).unwrap();
            let game = Game::setup(
                &config,
                territories(&[("A", "vermelho", 2), ("B", "azul", 2)]),
                dice,
                &mut rng,
            )
            .unwrap();

            assert_eq!(game.players().len(), 2);
            for player in game.players() {
                let mission = player.mission().unwrap();
                assert!(config.missions.iter().any(|m| m == mission.text()));
            }
        }

        #[test]
        fn classic_setup_assigns_no_missions() {
            let config = GameConfig {
                rules: RuleSet::Classic,
                missions: Vec::new(),
                ..GameConfig::default()
            };
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            let game = Game::setup(
                &config,
                territories(&[("A", "vermelho", 2), ("B", "azul", 2)]),
                ScriptedDice::new([1]).unwrap(),
                &mut rng,
            )
            .unwrap();
            assert!(game.players().iter().all(|p| p.mission().is_none()));
        }

        #[test]
        fn setup_rejects_single_territory() {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            let result = Game::setup(
                &GameConfig::default(),
                territories(&[("A", "vermelho", 2)]),
                ScriptedDice::new([1]).unwrap(),
                &mut rng,
            );
            assert!(matches!(
                result,
                Err(GameError::TooFewTerritories { min: 2, got: 1 })
            ));
        }

        #[test]
        fn new_rejects_empty_player_list() {
            let registry = Registry::new(territories(&[("A", "r", 1), ("B", "b", 1)])).unwrap();
            let result = Game::new(
                registry,
                Vec::new(),
                RuleSet::Classic,
                ScriptedDice::new([1]).unwrap(),
            );
            assert!(matches!(result, Err(GameError::NoPlayers)));
        }
    }
}
