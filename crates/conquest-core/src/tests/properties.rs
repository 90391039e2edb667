//! Property-based tests for the combat and mission rules.

use proptest::prelude::*;

use crate::dice::ScriptedDice;
use crate::mission::Mission;
use crate::registry::Registry;
use crate::resolver::CombatResolver;
use crate::territory::{Territory, TerritoryId};

use super::helpers::{label, registry_of, territory};

// =============================================================================
// Strategies
// =============================================================================

/// Runs one scripted battle, returning `(attacker_before, defender_before,
/// attacker_after, defender_after)`.
fn battle(
    attacker_troops: u32,
    defender_troops: u32,
    rolls: (u8, u8),
) -> (Territory, Territory, Territory, Territory) {
    let attacker = territory("A", "red", i64::from(attacker_troops));
    let defender = territory("D", "blue", i64::from(defender_troops));
    let (mut a, mut d) = (attacker.clone(), defender.clone());
    let mut dice = ScriptedDice::new([rolls.0, rolls.1]).unwrap();
    CombatResolver::new()
        .resolve(TerritoryId::new(0), &mut a, &mut d, &mut dice)
        .unwrap();
    (attacker, defender, a, d)
}

fn owners_strategy(max_len: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 2..max_len)
}

fn registry_from_flags(flags: &[bool]) -> Registry {
    let owners: Vec<&str> = flags.iter().map(|&mine| if mine { "A" } else { "B" }).collect();
    registry_of(&owners, 1)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// A defender always ends a battle with at least one troop.
    #[test]
    fn defender_never_empty(
        attacker in 1u32..10_000,
        defender in 1u32..10_000,
        attack_roll in 1u8..=6,
        defense_roll in 1u8..=6,
    ) {
        let (_, _, _, d) = battle(attacker, defender, (attack_roll, defense_roll));
        prop_assert!(d.troops() >= 1);
    }

    /// A winning roll moves max(1, troops / 2) and flips ownership.
    #[test]
    fn capture_conserves_attacker_troops(
        attacker in 1u32..10_000,
        defender in 1u32..10_000,
        defense_roll in 1u8..=5,
        margin in 1u8..=5,
    ) {
        let attack_roll = (defense_roll + margin).min(6);
        let (a0, _, a, d) = battle(attacker, defender, (attack_roll, defense_roll));

        let transferred = (attacker / 2).max(1);
        prop_assert_eq!(d.owner(), a0.owner());
        prop_assert_eq!(d.troops(), transferred);
        prop_assert_eq!(a.troops() + transferred, a0.troops());
    }

    /// A losing or tied roll costs exactly one attacker troop and nothing else.
    #[test]
    fn repel_leaves_defender_untouched(
        attacker in 1u32..10_000,
        defender in 1u32..10_000,
        attack_roll in 1u8..=6,
        extra in 0u8..=5,
    ) {
        let defense_roll = (attack_roll + extra).min(6);
        let (a0, d0, a, d) = battle(attacker, defender, (attack_roll, defense_roll));

        prop_assert_eq!(d, d0);
        prop_assert_eq!(a.troops(), a0.troops().saturating_sub(1));
        prop_assert_eq!(a.owner(), a0.owner());
    }

    /// Majority is never satisfied with nothing owned and always with everything owned.
    #[test]
    fn majority_extremes(len in 2usize..40) {
        let mission = Mission::new("dominar");
        let none = registry_of(&vec!["B"; len], 1);
        let all = registry_of(&vec!["A"; len], 1);
        prop_assert!(!mission.evaluate(&none, &label("A")));
        prop_assert!(mission.evaluate(&all, &label("A")));
    }

    /// Majority agrees with a direct count.
    #[test]
    fn majority_matches_count(flags in owners_strategy(40)) {
        let registry = registry_from_flags(&flags);
        let owned = flags.iter().filter(|&&f| f).count();
        let mission = Mission::new("dominar");
        prop_assert_eq!(mission.evaluate(&registry, &label("A")), owned > flags.len() / 2);
    }

    /// Three-in-a-row agrees with a windowed scan of the flags.
    #[test]
    fn three_in_a_row_matches_windows(flags in owners_strategy(40)) {
        let registry = registry_from_flags(&flags);
        let expected = flags.windows(3).any(|w| w.iter().all(|&f| f));
        let mission = Mission::new("3territorios");
        prop_assert_eq!(mission.evaluate(&registry, &label("A")), expected);
    }

    /// Text without a marker never wins, whatever the map.
    #[test]
    fn unmarked_text_never_wins(flags in owners_strategy(20), text in "[a-c ]{0,30}") {
        let registry = registry_from_flags(&flags);
        prop_assert!(!Mission::new(text).evaluate(&registry, &label("A")));
    }
}
