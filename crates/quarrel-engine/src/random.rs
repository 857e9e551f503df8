//! Random source implementations.
//!
//! [`SeededRandom`] is the production source: a seeded PRNG giving
//! deterministic replays from a recorded seed. [`FixedRandom`] and
//! [`ScriptedRandom`] feed known draws into the resolvers, matching the
//! spec's model of externally supplied randomness.

use std::collections::VecDeque;

use quarrel_core::EntityId;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{EngineError, EngineResult};
use crate::provider::RandomSource;

fn check_sides(sides: u32) -> EngineResult<()> {
    if sides < 1 {
        return Err(EngineError::InvalidParameter(
            "die must have at least one face".to_string(),
        ));
    }
    Ok(())
}

/// A random source backed by a seeded [`StdRng`].
///
/// Two instances built from the same seed produce the same draw sequence,
/// so a whole resolution can be replayed from one `u64`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn draw(&mut self, _entity: EntityId, sides: u32) -> EngineResult<u32> {
        check_sides(sides)?;
        Ok(self.rng.random_range(1..=sides))
    }
}

/// A random source that always returns the same value, clamped into
/// `[1, sides]`.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    value: u32,
}

impl FixedRandom {
    /// Create a source that always draws `value`.
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl RandomSource for FixedRandom {
    fn draw(&mut self, _entity: EntityId, sides: u32) -> EngineResult<u32> {
        check_sides(sides)?;
        Ok(self.value.clamp(1, sides))
    }
}

/// A random source that plays back a finite queue of recorded draws.
///
/// Draining the queue is an error ([`EngineError::RandomExhausted`]), as is
/// a recorded draw that does not fit the requested die — both indicate the
/// recording and the resolution have drifted apart.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
}

impl ScriptedRandom {
    /// Create a source from recorded draws, consumed in order.
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Number of draws left in the script.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn draw(&mut self, entity: EntityId, sides: u32) -> EngineResult<u32> {
        check_sides(sides)?;
        let value = self
            .draws
            .pop_front()
            .ok_or(EngineError::RandomExhausted(entity))?;
        if value < 1 || value > sides {
            return Err(EngineError::InvalidParameter(format!(
                "recorded draw {value} does not fit a d{sides}"
            )));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_draws_are_in_range() {
        let entity = EntityId::new();
        let mut random = SeededRandom::from_seed(7);
        for _ in 0..100 {
            let value = random.draw(entity, 20).unwrap();
            assert!((1..=20).contains(&value));
        }
    }

    #[test]
    fn seeded_draws_replay_from_seed() {
        let entity = EntityId::new();
        let mut a = SeededRandom::from_seed(99);
        let mut b = SeededRandom::from_seed(99);
        for _ in 0..20 {
            assert_eq!(a.draw(entity, 20).unwrap(), b.draw(entity, 20).unwrap());
        }
    }

    #[test]
    fn fixed_clamps_to_die() {
        let entity = EntityId::new();
        let mut random = FixedRandom::new(50);
        assert_eq!(random.draw(entity, 20).unwrap(), 20);
        let mut random = FixedRandom::new(0);
        assert_eq!(random.draw(entity, 6).unwrap(), 1);
    }

    #[test]
    fn scripted_plays_back_in_order() {
        let entity = EntityId::new();
        let mut random = ScriptedRandom::new([19, 5, 3]);
        assert_eq!(random.remaining(), 3);
        assert_eq!(random.draw(entity, 20).unwrap(), 19);
        assert_eq!(random.draw(entity, 20).unwrap(), 5);
        assert_eq!(random.draw(entity, 6).unwrap(), 3);
        assert_eq!(random.remaining(), 0);
    }

    #[test]
    fn scripted_errors_when_exhausted() {
        let entity = EntityId::new();
        let mut random = ScriptedRandom::new([]);
        assert!(matches!(
            random.draw(entity, 20),
            Err(EngineError::RandomExhausted(_))
        ));
    }

    #[test]
    fn scripted_rejects_draw_outside_die() {
        let entity = EntityId::new();
        let mut random = ScriptedRandom::new([25]);
        assert!(matches!(
            random.draw(entity, 20),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_sided_die_is_rejected() {
        let entity = EntityId::new();
        let mut random = SeededRandom::from_seed(1);
        assert!(random.draw(entity, 0).is_err());
        let mut random = ScriptedRandom::new([1]);
        assert!(random.draw(entity, 0).is_err());
        assert_eq!(random.remaining(), 1);
    }
}
