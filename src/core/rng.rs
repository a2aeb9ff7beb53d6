//! Deterministic randomness for dice, animation flicker and bots.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Injectable**: The controller draws authoritative rolls through the
//!   [`DiceSource`] trait, so tests can script exact outcomes
//! - **Context streams**: Cosmetic flicker and bot choices use independent
//!   streams that never disturb the authoritative dice sequence
//!
//! ```
//! use rust_ludo::core::{DiceSource, GameRng};
//!
//! let mut dice1 = GameRng::new(42);
//! let mut dice2 = GameRng::new(42);
//!
//! for _ in 0..20 {
//!     let roll = dice1.roll();
//!     assert!((1..=6).contains(&roll));
//!     assert_eq!(roll, dice2.roll());
//! }
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Faces on the die.
pub const DIE_FACES: u8 = 6;

/// Source of authoritative dice values.
///
/// Every implementation must return values in `1..=6`.
pub trait DiceSource: Send {
    /// Draw the next committed roll.
    fn roll(&mut self) -> u8;
}

/// Seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform die face in `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.roll_die()
    }
}

/// Dice that replay a fixed script, then fall back to a seeded RNG.
///
/// Out-of-range scripted values are clamped into `1..=6`.
///
/// ```
/// use rust_ludo::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 3]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.remaining(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: VecDeque<u8>,
    fallback: GameRng,
}

impl ScriptedDice {
    /// Script the given rolls, falling back to seed 0 afterwards.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self::with_fallback(rolls, GameRng::new(0))
    }

    /// Script the given rolls with an explicit fallback RNG.
    pub fn with_fallback(rolls: impl IntoIterator<Item = u8>, fallback: GameRng) -> Self {
        Self {
            script: rolls.into_iter().collect(),
            fallback,
        }
    }

    /// Append more scripted rolls.
    pub fn push(&mut self, roll: u8) {
        self.script.push_back(roll);
    }

    /// Scripted rolls not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        match self.script.pop_front() {
            Some(value) => value.clamp(1, DIE_FACES),
            None => self.fallback.roll_die(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_rolls_cover_all_faces() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..600 {
            let roll = rng.roll_die();
            assert!((1..=6).contains(&roll));
            seen[(roll - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_streams_are_independent() {
        let rng = GameRng::new(42);
        let mut flicker = rng.for_context("flicker");
        let mut bot = rng.for_context("bot");

        let seq1: Vec<_> = (0..20).map(|_| flicker.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| bot.roll_die()).collect();

        assert_ne!(seq1, seq2);
        assert_eq!(rng.for_context("flicker").seed(), flicker.seed());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some_and(|c| items.contains(c)));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_scripted_dice_then_fallback() {
        let mut dice = ScriptedDice::new([6, 1, 9, 0]);

        assert_eq!(dice.roll(), 6);
        assert_eq!(dice.roll(), 1);
        assert_eq!(dice.roll(), 6); // clamped
        assert_eq!(dice.roll(), 1); // clamped
        assert_eq!(dice.remaining(), 0);

        let mut reference = GameRng::new(0);
        for _ in 0..5 {
            assert_eq!(dice.roll(), reference.roll_die());
        }
    }

    #[test]
    fn test_scripted_dice_push() {
        let mut dice = ScriptedDice::new(std::iter::empty());
        dice.push(4);
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll(), 4);
    }
}
