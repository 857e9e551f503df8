//! Deterministic d20 combat resolution engine for Quarrel.
//!
//! Given a character's ability scores, skill ranks, and feats — fetched
//! through provider traits — plus die draws from a [`RandomSource`], the
//! engine computes initiative and opposed checks, full attack resolution
//! with two-stage critical confirmation, and clamped damage totals. All
//! operations are stateless and deterministic over their inputs.

pub mod attack;
pub mod check;
pub mod dice;
pub mod error;
pub mod modifier;
pub mod preset;
pub mod provider;
pub mod random;
pub mod resolver;
pub mod roster;

pub use attack::{AttackOutcome, CriticalState};
pub use check::{CheckProfile, FeatBonus, RollOutcome};
pub use dice::Die;
pub use error::{EngineError, EngineResult};
pub use modifier::{ability_modifier, clamped_add};
pub use provider::{AttributeProvider, FeatProvider, RandomSource, SkillProvider};
pub use random::{FixedRandom, ScriptedRandom, SeededRandom};
pub use resolver::Resolver;
pub use roster::{CharacterRecord, Roster};
