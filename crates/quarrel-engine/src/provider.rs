//! Boundary collaborator traits the engine depends on.
//!
//! The engine is pure with respect to these reads: given identical provider
//! responses and identical draws, every operation is deterministic. The
//! host system implements the traits; this crate ships an in-memory
//! [`Roster`](crate::roster::Roster) and several
//! [random sources](crate::random) for convenience and tests.
//!
//! Provider failures propagate unchanged — the engine never falls back to
//! default values when a lookup errors. A legitimately zero-valued record
//! (all scores 0, no ranks, no feats) is a valid response, not an error.

use quarrel_core::{AbilityScores, EntityId, Feats, SkillRanks};

use crate::error::EngineResult;

/// Source of uniformly distributed die draws.
pub trait RandomSource {
    /// Produce one fresh, independent draw in `[1, sides]` for the entity.
    ///
    /// Every call is a new draw; the attack roll and its confirmation roll
    /// are two separate calls within one resolution. Implementations must
    /// reject `sides < 1`.
    fn draw(&mut self, entity: EntityId, sides: u32) -> EngineResult<u32>;
}

/// Provider of per-entity ability scores.
pub trait AttributeProvider {
    /// Fetch the entity's six raw ability scores.
    fn ability_scores(&self, entity: EntityId) -> EngineResult<AbilityScores>;
}

/// Provider of per-entity skill ranks.
pub trait SkillProvider {
    /// Fetch the entity's skill ranks.
    fn skill_ranks(&self, entity: EntityId) -> EngineResult<SkillRanks>;
}

/// Provider of per-entity feat flags.
pub trait FeatProvider {
    /// Fetch the set of feats the entity possesses.
    fn feats(&self, entity: EntityId) -> EngineResult<Feats>;
}
