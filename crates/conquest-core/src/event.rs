//! Game events for display and telemetry.
//!
//! The [`EventLog`] records what happened during each attack without
//! touching game state. The front end drains it after every turn with
//! [`EventLog::take_events`] to decide what to print.

use serde::Serialize;

use crate::resolver::BattleReport;
use crate::territory::{OwnerLabel, TerritoryId};

/// Something that happened during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A battle was resolved.
    BattleFought {
        /// Turn number, starting at 1.
        turn: u32,
        /// Attacking territory.
        attacker: TerritoryId,
        /// Defending territory.
        defender: TerritoryId,
        /// Full battle result.
        report: BattleReport,
    },
    /// A territory changed hands.
    TerritoryCaptured {
        /// Turn number, starting at 1.
        turn: u32,
        /// The captured territory.
        territory: TerritoryId,
        /// Owner before the battle.
        previous_owner: OwnerLabel,
        /// Owner after the battle.
        new_owner: OwnerLabel,
    },
    /// A player completed their mission and won.
    MissionCompleted {
        /// Turn number, starting at 1.
        turn: u32,
        /// Position of the winner in player order.
        player: usize,
        /// Winner's owner label.
        label: OwnerLabel,
    },
}

/// Ordered record of events since the last drain.
///
/// # Example
///
/// ```
/// use conquest_core::event::EventLog;
///
/// let mut log = EventLog::new();
/// assert!(log.is_empty());
/// assert!(log.take_events().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event.
    pub fn record(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drains and returns all recorded events, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
