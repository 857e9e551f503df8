//! Character data model for Quarrel: abilities, skills, feats, and entity
//! identifiers.
//!
//! This crate defines the value records the resolution engine reads. It
//! carries no engine logic: scores, ranks, and feat flags are plain data
//! owned by whatever system hosts the providers; the engine only borrows
//! read access for the duration of one resolution call.

pub mod ability;
pub mod entity;
pub mod feat;
pub mod skill;

pub use ability::{Ability, AbilityScores};
pub use entity::EntityId;
pub use feat::{Feat, Feats};
pub use skill::{Skill, SkillRanks};
