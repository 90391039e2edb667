//! Text rendering of game state.

use std::io::{self, Write};

use conquest_core::{BattleOutcome, BattleReport, Player, Registry, Territory, Victory};

/// Prints every territory with its 1-based number.
pub fn territories(out: &mut impl Write, registry: &Registry) -> io::Result<()> {
    writeln!(out, "\n=== TERRITORIES ===")?;
    for (id, territory) in registry.iter() {
        writeln!(out, "\nTerritory {id}:")?;
        writeln!(out, "  Name  : {}", territory.name())?;
        writeln!(out, "  Color : {}", territory.owner())?;
        writeln!(out, "  Troops: {}", territory.troops())?;
    }
    writeln!(out)
}

/// Prints each player's secret mission.
pub fn missions(out: &mut impl Write, players: &[Player]) -> io::Result<()> {
    for player in players {
        if let Some(mission) = player.mission() {
            writeln!(out, "\n=== MISSION FOR {} ===", player.label())?;
            writeln!(out, "{}\n", mission.text())?;
        }
    }
    Ok(())
}

/// Prints one battle: the contenders as they stood, both rolls, the result.
pub fn battle(
    out: &mut impl Write,
    attacker: &Territory,
    defender: &Territory,
    report: &BattleReport,
) -> io::Result<()> {
    writeln!(out, "\n=== ATTACK ===")?;
    writeln!(
        out,
        "Attacker: {} ({}) - Troops: {}",
        attacker.name(),
        attacker.owner(),
        attacker.troops()
    )?;
    writeln!(
        out,
        "Defender: {} ({}) - Troops: {}",
        defender.name(),
        defender.owner(),
        defender.troops()
    )?;
    writeln!(out, "\nAttacker rolled: {}", report.attack_roll)?;
    writeln!(out, "Defender rolled: {}", report.defense_roll)?;

    match report.outcome {
        BattleOutcome::Captured { .. } => {
            writeln!(out, "\nResult: THE ATTACKER WON THE BATTLE!")?;
            writeln!(out, "{} was conquered!", defender.name())?;
            writeln!(out, "New defender color: {}", report.defender_owner_after)?;
            writeln!(
                out,
                "Troops left on the attacker: {}",
                report.attacker_troops_after
            )?;
            writeln!(
                out,
                "Troops on the conquered territory: {}",
                report.defender_troops_after
            )
        }
        BattleOutcome::Repelled { lost } => {
            writeln!(out, "\nResult: THE DEFENDER HELD!")?;
            writeln!(out, "The attacker lost {lost} troop(s).")?;
            writeln!(
                out,
                "Troops left on the attacker: {}",
                report.attacker_troops_after
            )
        }
    }
}

/// Prints the winner and the mission they completed.
pub fn victory(out: &mut impl Write, victory: &Victory) -> io::Result<()> {
    let number = victory.player + 1;
    writeln!(
        out,
        "\n=== PLAYER {number} ({}) COMPLETED THEIR MISSION! ===",
        victory.label
    )?;
    writeln!(out, "Mission: {}", victory.mission.text())?;
    writeln!(out, "PLAYER {number} WINS THE GAME!")?;
    writeln!(out, "\nGame over!")
}
