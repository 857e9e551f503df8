//! The six abilities and per-character ability scores.

use serde::{Deserialize, Serialize};

/// One of the six abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Physical power.
    Strength,
    /// Agility and reflexes. Drives initiative.
    Dexterity,
    /// Health and stamina.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and willpower. Drives sense motive, listen, and spot.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// All six abilities in canonical order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Dexterity => write!(f, "dexterity"),
            Self::Constitution => write!(f, "constitution"),
            Self::Intelligence => write!(f, "intelligence"),
            Self::Wisdom => write!(f, "wisdom"),
            Self::Charisma => write!(f, "charisma"),
        }
    }
}

/// A character's six raw ability scores.
///
/// Scores are non-negative; typical tabletop values sit in 0–30 but no
/// upper bound is enforced here. A default set (all zeroes) is a valid
/// record, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Raw strength score.
    pub strength: u32,
    /// Raw dexterity score.
    pub dexterity: u32,
    /// Raw constitution score.
    pub constitution: u32,
    /// Raw intelligence score.
    pub intelligence: u32,
    /// Raw wisdom score.
    pub wisdom: u32,
    /// Raw charisma score.
    pub charisma: u32,
}

impl AbilityScores {
    /// Get the raw score for one ability.
    pub fn get(&self, ability: Ability) -> u32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Return a copy with one ability set to the given score.
    pub fn with(mut self, ability: Ability, score: u32) -> Self {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
        self
    }
}
