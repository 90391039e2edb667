//! Randomness capability for battles.
//!
//! Combat never touches a global generator. It draws from a [`Dice`]
//! implementation handed in by the caller:
//!
//! - [`SeededDice`]: `ChaCha8Rng` seeded once per game, reproducible by seed
//! - [`ScriptedDice`]: replays a fixed list of faces, for tests and replays

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GameError;

/// Number of faces on a die. Rolls fall in `1..=DIE_FACES`.
pub const DIE_FACES: u8 = 6;

/// Source of six-sided die rolls.
pub trait Dice {
    /// Rolls one die, returning a face in `1..=6`.
    fn roll(&mut self) -> u8;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Dice backed by a seeded `ChaCha8Rng`.
///
/// The same generator also draws missions at setup, so a single seed
/// reproduces a whole game.
///
/// # Example
///
/// ```
/// use conquest_core::{Dice, SeededDice};
///
/// let mut a = SeededDice::new(7);
/// let mut b = SeededDice::new(7);
/// let rolls_a: Vec<u8> = (0..10).map(|_| a.roll()).collect();
/// let rolls_b: Vec<u8> = (0..10).map(|_| b.roll()).collect();
/// assert_eq!(rolls_a, rolls_b);
/// assert!(rolls_a.iter().all(|r| (1..=6).contains(r)));
/// ```
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededDice {
    /// Creates dice from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used to create these dice.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Mutable access to the underlying generator, for non-dice draws.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Dice for SeededDice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Dice that replay a fixed sequence of faces, wrapping around at the end.
///
/// # Example
///
/// ```
/// use conquest_core::{Dice, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 1]).unwrap();
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 1);
/// assert_eq!(dice.roll(), 6);
/// assert!(ScriptedDice::new([7]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Creates scripted dice.
    ///
    /// # Errors
    ///
    /// - [`GameError::EmptyDiceScript`] if `faces` is empty
    /// - [`GameError::InvalidDieFace`] for a face outside `1..=6`
    pub fn new<I: IntoIterator<Item = u8>>(faces: I) -> Result<Self, GameError> {
        let faces: Vec<u8> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(GameError::EmptyDiceScript);
        }
        if let Some(&bad) = faces.iter().find(|f| !(1..=DIE_FACES).contains(*f)) {
            return Err(GameError::InvalidDieFace(bad));
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Number of rolls served so far.
    #[must_use]
    pub fn rolls_served(&self) -> usize {
        self.cursor
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
