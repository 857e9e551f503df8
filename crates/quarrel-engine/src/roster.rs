//! In-memory character providers.
//!
//! A [`Roster`] maps entity identifiers to character records and implements
//! all three character provider traits, so a single value can back a whole
//! [`Resolver`](crate::resolver::Resolver). Hosts with real storage
//! implement the traits themselves; the roster also deserializes from JSON
//! for fixtures and tools.

use std::collections::HashMap;

use quarrel_core::{AbilityScores, EntityId, Feats, SkillRanks};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::provider::{AttributeProvider, FeatProvider, SkillProvider};

/// One character's complete mechanical data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// The six raw ability scores.
    pub abilities: AbilityScores,
    /// Skill ranks; unset skills are untrained.
    pub skills: SkillRanks,
    /// Feats the character possesses.
    pub feats: Feats,
}

/// An in-memory collection of character records keyed by entity ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// All known characters.
    characters: HashMap<EntityId, CharacterRecord>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under a freshly generated ID and return the ID.
    pub fn add(&mut self, record: CharacterRecord) -> EntityId {
        let id = EntityId::new();
        self.characters.insert(id, record);
        id
    }

    /// Insert a record under a caller-chosen ID, replacing any previous one.
    pub fn insert(&mut self, id: EntityId, record: CharacterRecord) {
        self.characters.insert(id, record);
    }

    /// Look up a record by ID.
    pub fn get(&self, id: EntityId) -> Option<&CharacterRecord> {
        self.characters.get(&id)
    }

    /// Number of characters in the roster.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Returns true if the roster holds no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    fn record(&self, id: EntityId) -> EngineResult<&CharacterRecord> {
        self.characters
            .get(&id)
            .ok_or(EngineError::UnknownEntity(id))
    }
}

impl AttributeProvider for Roster {
    fn ability_scores(&self, entity: EntityId) -> EngineResult<AbilityScores> {
        Ok(self.record(entity)?.abilities)
    }
}

impl SkillProvider for Roster {
    fn skill_ranks(&self, entity: EntityId) -> EngineResult<SkillRanks> {
        Ok(self.record(entity)?.skills.clone())
    }
}

impl FeatProvider for Roster {
    fn feats(&self, entity: EntityId) -> EngineResult<Feats> {
        Ok(self.record(entity)?.feats.clone())
    }
}
