//! Feat identifiers and per-character feat flag sets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A feat a character may possess.
///
/// Membership is boolean; feats have no ranks. The engine maps specific
/// feats to flat bonuses on specific checks (e.g. [`Feat::ImprovedInitiative`]
/// grants +4 on initiative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feat {
    /// +2 on listen and spot checks.
    Alertness,
    /// Reduced penalties when fighting unseen foes.
    BlindFight,
    /// Easier casting while threatened.
    CombatCasting,
    /// Trade attack accuracy for defense.
    CombatExpertise,
    /// Additional attacks of opportunity.
    CombatReflexes,
    /// +2 on bluff and disguise checks.
    Deceitful,
    /// +2 on disable device and open lock checks.
    DeftHands,
    /// +2 on appraise and decipher script checks.
    Diligent,
    /// +1 dodge bonus to armor class.
    Dodge,
    /// +2 on fortitude saves.
    GreatFortitude,
    /// +4 on initiative checks.
    ImprovedInitiative,
    /// +2 on gather information and search checks.
    Investigator,
    /// +2 on will saves.
    IronWill,
    /// +2 on reflex saves.
    LightningReflexes,
    /// +2 on diplomacy and sense motive checks.
    Negotiator,
    /// +2 on escape artist and use rope checks.
    NimbleFingers,
    /// +2 on diplomacy and intimidate checks.
    Persuasive,
    /// +2 on heal and survival checks.
    SelfSufficient,
    /// +2 on hide and move silently checks.
    Stealthy,
    /// Additional hit points.
    Toughness,
    /// Use dexterity instead of strength on light-weapon attacks.
    WeaponFinesse,
}

impl std::fmt::Display for Feat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Alertness => "alertness",
            Self::BlindFight => "blind_fight",
            Self::CombatCasting => "combat_casting",
            Self::CombatExpertise => "combat_expertise",
            Self::CombatReflexes => "combat_reflexes",
            Self::Deceitful => "deceitful",
            Self::DeftHands => "deft_hands",
            Self::Diligent => "diligent",
            Self::Dodge => "dodge",
            Self::GreatFortitude => "great_fortitude",
            Self::ImprovedInitiative => "improved_initiative",
            Self::Investigator => "investigator",
            Self::IronWill => "iron_will",
            Self::LightningReflexes => "lightning_reflexes",
            Self::Negotiator => "negotiator",
            Self::NimbleFingers => "nimble_fingers",
            Self::Persuasive => "persuasive",
            Self::SelfSufficient => "self_sufficient",
            Self::Stealthy => "stealthy",
            Self::Toughness => "toughness",
            Self::WeaponFinesse => "weapon_finesse",
        };
        write!(f, "{name}")
    }
}

/// The set of feats a character currently possesses.
///
/// An empty set is a valid record (no feats), not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feats {
    /// Feats held by the character.
    feats: HashSet<Feat>,
}

impl Feats {
    /// Create an empty feat set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the character has the given feat.
    pub fn has(&self, feat: Feat) -> bool {
        self.feats.contains(&feat)
    }

    /// Return a copy with the given feat granted.
    pub fn with(mut self, feat: Feat) -> Self {
        self.feats.insert(feat);
        self
    }

    /// Number of feats held.
    pub fn count(&self) -> usize {
        self.feats.len()
    }
}
