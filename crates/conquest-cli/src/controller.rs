//! Interactive setup and turn menu.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use conquest_core::{Dice, Game, Registry, RuleSet, Territory, TerritoryId};

use crate::display;
use crate::prompt::Prompter;

const INPUT_CLOSED: &str = "input closed during setup";

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The players chose option 0.
    Quit,
    /// A mission was completed.
    Victory,
    /// Input ran out.
    InputClosed,
}

/// Registers territories from interactive input.
///
/// # Errors
///
/// Fails when input ends before every territory is entered, or when
/// storage for the requested count cannot be reserved.
pub fn read_territories<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<Territory>> {
    let count = prompter
        .ask_at_least(
            "\nTotal number of territories (minimum 2): ",
            i64::try_from(Registry::MIN_TERRITORIES)?,
            "Invalid count! At least 2 territories are required.",
        )?
        .context(INPUT_CLOSED)?;
    let count = usize::try_from(count)?;

    let mut territories = Registry::reserve(count)?;

    for number in 1..=count {
        writeln!(prompter.output(), "\n=== TERRITORY {number} ===")?;
        let name = prompter
            .ask_text("Territory name: ")?
            .context(INPUT_CLOSED)?;
        let owner = prompter
            .ask_token("Army color (e.g. vermelho, azul, verde): ")?
            .context(INPUT_CLOSED)?;
        let troops = prompter
            .ask_at_least(
                "Troops (minimum 1): ",
                1,
                "Invalid troop count! Try again.",
            )?
            .context(INPUT_CLOSED)?;
        territories.push(Territory::register(&name, &owner, troops)?);
    }
    Ok(territories)
}

/// Runs the turn menu until a victory, an exit or the end of input.
///
/// Rejected selections are reported and the menu is shown again.
///
/// # Errors
///
/// I/O failures and non-recoverable game errors.
pub fn play<D: Dice, R: BufRead, W: Write>(
    game: &mut Game<D>,
    prompter: &mut Prompter<R, W>,
) -> Result<Exit> {
    if game.rules() == RuleSet::Missions {
        display::missions(prompter.output(), game.players())?;
    }
    display::territories(prompter.output(), game.registry())?;

    loop {
        let out = prompter.output();
        writeln!(out, "=== ACTIONS ===")?;
        writeln!(out, "1 - Attack")?;
        writeln!(out, "2 - Show territories")?;
        writeln!(out, "0 - Exit")?;
        let Some(choice) = prompter.ask_number("Choose an option: ")? else {
            return Ok(Exit::InputClosed);
        };

        match choice {
            1 => {
                display::territories(prompter.output(), game.registry())?;
                let Some(attacker) = prompter.ask_number("Attacking territory number: ")? else {
                    return Ok(Exit::InputClosed);
                };
                let Some(defender) = prompter.ask_number("Defending territory number: ")? else {
                    return Ok(Exit::InputClosed);
                };
                if attack(game, prompter, attacker, defender)? {
                    return Ok(Exit::Victory);
                }
            }
            2 => display::territories(prompter.output(), game.registry())?,
            0 => {
                writeln!(prompter.output(), "\nExiting...")?;
                return Ok(Exit::Quit);
            }
            _ => writeln!(prompter.output(), "\nInvalid option! Try again.")?,
        }
    }
}

/// Runs one menu attack. Returns true when it ended the game.
fn attack<D: Dice, R: BufRead, W: Write>(
    game: &mut Game<D>,
    prompter: &mut Prompter<R, W>,
    attacker: i64,
    defender: i64,
) -> Result<bool> {
    let (Some(attacker), Some(defender)) = (to_id(attacker), to_id(defender)) else {
        writeln!(prompter.output(), "\n[ERROR] Invalid territory number!")?;
        return Ok(false);
    };

    let before = game
        .registry()
        .get(attacker)
        .cloned()
        .and_then(|a| game.registry().get(defender).cloned().map(|d| (a, d)));

    match game.attack(attacker, defender) {
        Ok(outcome) => {
            let (attacking, defending) = before?;
            let out = prompter.output();
            display::battle(out, &attacking, &defending, &outcome.report)?;
            display::territories(out, game.registry())?;
            if let Some(victory) = &outcome.victory {
                display::victory(out, victory)?;
                return Ok(true);
            }
            Ok(false)
        }
        Err(err) if err.is_recoverable() => {
            writeln!(prompter.output(), "\n[ERROR] {err}")?;
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

fn to_id(number: i64) -> Option<TerritoryId> {
    usize::try_from(number)
        .ok()
        .and_then(TerritoryId::from_one_based)
}
