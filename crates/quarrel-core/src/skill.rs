//! Skill identifiers and per-character skill ranks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A skill a character can invest ranks in.
///
/// The enumeration is fixed; there are no user-defined skills. Checks
/// reference skills by identifier, never by positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Estimate the value of goods.
    Appraise,
    /// Keep footing on narrow or unstable surfaces.
    Balance,
    /// Mislead with words.
    Bluff,
    /// Scale walls and cliffs.
    Climb,
    /// Maintain focus under duress.
    Concentration,
    /// Create and repair items.
    Craft,
    /// Read coded or archaic writing.
    DecipherScript,
    /// Negotiate and persuade.
    Diplomacy,
    /// Disarm traps and sabotage mechanisms.
    DisableDevice,
    /// Change appearance to avoid recognition.
    Disguise,
    /// Slip bonds and squeeze through tight spaces.
    EscapeArtist,
    /// Produce false documents.
    Forgery,
    /// Collect rumors and information.
    GatherInformation,
    /// Train and direct animals.
    HandleAnimal,
    /// Treat wounds and ailments.
    Heal,
    /// Conceal oneself from view.
    Hide,
    /// Coerce through menace.
    Intimidate,
    /// Leap over obstacles.
    Jump,
    /// Recall learned lore.
    Knowledge,
    /// Notice sounds.
    Listen,
    /// Move without being heard.
    MoveSilently,
    /// Pick locks.
    OpenLock,
    /// Entertain an audience.
    Perform,
    /// Practice a trade.
    Profession,
    /// Control a mount.
    Ride,
    /// Find hidden objects and details.
    Search,
    /// Read intentions and detect lies.
    SenseMotive,
    /// Palm objects and pick pockets.
    SleightOfHand,
    /// Command additional languages.
    SpeakLanguage,
    /// Identify magical effects.
    Spellcraft,
    /// Notice things at a distance.
    Spot,
    /// Endure and navigate the wilds.
    Survival,
    /// Move through water.
    Swim,
    /// Dive, roll, and avoid falls.
    Tumble,
    /// Operate magic devices by force of will.
    UseMagicDevice,
    /// Employ ropes for climbing and binding.
    UseRope,
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Appraise => "appraise",
            Self::Balance => "balance",
            Self::Bluff => "bluff",
            Self::Climb => "climb",
            Self::Concentration => "concentration",
            Self::Craft => "craft",
            Self::DecipherScript => "decipher_script",
            Self::Diplomacy => "diplomacy",
            Self::DisableDevice => "disable_device",
            Self::Disguise => "disguise",
            Self::EscapeArtist => "escape_artist",
            Self::Forgery => "forgery",
            Self::GatherInformation => "gather_information",
            Self::HandleAnimal => "handle_animal",
            Self::Heal => "heal",
            Self::Hide => "hide",
            Self::Intimidate => "intimidate",
            Self::Jump => "jump",
            Self::Knowledge => "knowledge",
            Self::Listen => "listen",
            Self::MoveSilently => "move_silently",
            Self::OpenLock => "open_lock",
            Self::Perform => "perform",
            Self::Profession => "profession",
            Self::Ride => "ride",
            Self::Search => "search",
            Self::SenseMotive => "sense_motive",
            Self::SleightOfHand => "sleight_of_hand",
            Self::SpeakLanguage => "speak_language",
            Self::Spellcraft => "spellcraft",
            Self::Spot => "spot",
            Self::Survival => "survival",
            Self::Swim => "swim",
            Self::Tumble => "tumble",
            Self::UseMagicDevice => "use_magic_device",
            Self::UseRope => "use_rope",
        };
        write!(f, "{name}")
    }
}

/// A character's skill ranks, keyed by skill identifier.
///
/// Skills without an entry read as rank 0 (untrained). Stored as a map
/// rather than a fixed-size array so lookups carry no bounds assumptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRanks {
    /// Ranks for skills the character has trained.
    ranks: HashMap<Skill, u32>,
}

impl SkillRanks {
    /// Create an empty rank set (all skills untrained).
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rank in a skill, 0 if untrained.
    pub fn rank(&self, skill: Skill) -> u32 {
        self.ranks.get(&skill).copied().unwrap_or(0)
    }

    /// Return a copy with the given skill set to `rank`.
    pub fn with(mut self, skill: Skill, rank: u32) -> Self {
        self.ranks.insert(skill, rank);
        self
    }

    /// Number of skills with at least one rank recorded.
    pub fn trained_count(&self) -> usize {
        self.ranks.values().filter(|r| **r > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untrained_rank_is_zero() {
        let ranks = SkillRanks::new();
        assert_eq!(ranks.rank(Skill::SenseMotive), 0);
        assert_eq!(ranks.trained_count(), 0);
    }

    #[test]
    fn with_sets_rank() {
        let ranks = SkillRanks::new()
            .with(Skill::SenseMotive, 4)
            .with(Skill::Listen, 2);
        assert_eq!(ranks.rank(Skill::SenseMotive), 4);
        assert_eq!(ranks.rank(Skill::Listen), 2);
        assert_eq!(ranks.rank(Skill::Spot), 0);
        assert_eq!(ranks.trained_count(), 2);
    }

    #[test]
    fn skill_display() {
        assert_eq!(Skill::SenseMotive.to_string(), "sense_motive");
        assert_eq!(Skill::UseRope.to_string(), "use_rope");
        assert_eq!(Skill::Climb.to_string(), "climb");
    }

    #[test]
    fn serde_round_trip() {
        let ranks = SkillRanks::new().with(Skill::Spot, 3);
        let json = serde_json::to_string(&ranks).unwrap();
        let back: SkillRanks = serde_json::from_str(&json).unwrap();
        assert_eq!(ranks, back);
    }
}
