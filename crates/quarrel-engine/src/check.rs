//! The parameterized check template.
//!
//! Every ability/skill/feat check — initiative, sense motive, and any
//! future check of the same shape — is one [`CheckProfile`] scored by the
//! same formula, so the clamp ordering cannot drift between named checks:
//!
//! ```text
//! score = max(roll + ability_modifier, 0) + skill rank + feat bonuses
//! ```
//!
//! The ability modifier is clamped against the roll first; skill ranks and
//! feat bonuses are added afterwards unclamped, so a low-ability character
//! keeps the full value of its skill investment.

use quarrel_core::{Ability, AbilityScores, Feat, Feats, Skill, SkillRanks};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::modifier::{ability_modifier, clamped_add};

/// The result of a resolved check: the raw die and the adjusted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The natural die value as drawn.
    pub roll: u32,
    /// The roll adjusted by modifiers, floored at 0.
    pub score: u32,
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rolled {}, score {}", self.roll, self.score)
    }
}

/// A flat bonus granted by possessing a feat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatBonus {
    /// The feat that grants the bonus.
    pub feat: Feat,
    /// The bonus added to the score when the feat is held.
    pub bonus: u32,
}

/// A named check: which ability modifies it, which skill's ranks apply,
/// and which feats grant flat bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckProfile {
    /// Display name of the check (e.g. "initiative").
    pub name: String,
    /// The ability whose modifier applies.
    pub ability: Ability,
    /// The skill whose ranks apply, if any.
    pub skill: Option<Skill>,
    /// Feats that grant flat bonuses on this check.
    pub feat_bonuses: Vec<FeatBonus>,
}

impl CheckProfile {
    /// Create a profile with no skill and no feat bonuses.
    pub fn new(name: impl Into<String>, ability: Ability) -> Self {
        Self {
            name: name.into(),
            ability,
            skill: None,
            feat_bonuses: Vec::new(),
        }
    }

    /// Apply a skill's ranks to this check.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skill = Some(skill);
        self
    }

    /// Grant a flat bonus when the character holds the feat.
    pub fn with_feat_bonus(mut self, feat: Feat, bonus: u32) -> Self {
        self.feat_bonuses.push(FeatBonus { feat, bonus });
        self
    }

    /// Score a raw d20 roll against this profile.
    ///
    /// Pure over its inputs; the caller supplies the already-fetched
    /// character data and the drawn roll.
    pub fn score(
        &self,
        roll: u32,
        abilities: &AbilityScores,
        skills: &SkillRanks,
        feats: &Feats,
    ) -> EngineResult<u32> {
        let modifier = ability_modifier(abilities.get(self.ability));
        let mut score = clamped_add(roll, modifier);
        if let Some(skill) = self.skill {
            score = score
                .checked_add(skills.rank(skill))
                .ok_or(EngineError::ArithmeticOverflow("check score"))?;
        }
        for feat_bonus in &self.feat_bonuses {
            if feats.has(feat_bonus.feat) {
                score = score
                    .checked_add(feat_bonus.bonus)
                    .ok_or(EngineError::ArithmeticOverflow("check score"))?;
            }
        }
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> (AbilityScores, SkillRanks, Feats) {
        (AbilityScores::default(), SkillRanks::new(), Feats::new())
    }

    #[test]
    fn ability_clamp_applies_before_skill_ranks() {
        // Wisdom 0 gives -5; the clamp floors roll 1 to 0, then 4 ranks
        // land on top untouched.
        let profile = CheckProfile::new("sense motive", Ability::Wisdom)
            .with_skill(Skill::SenseMotive);
        let (abilities, _, feats) = blank();
        let skills = SkillRanks::new().with(Skill::SenseMotive, 4);
        assert_eq!(profile.score(1, &abilities, &skills, &feats).unwrap(), 4);
    }

    #[test]
    fn feat_bonus_only_applies_when_held() {
        let profile = CheckProfile::new("initiative", Ability::Dexterity)
            .with_feat_bonus(Feat::ImprovedInitiative, 4);
        let (abilities, skills, feats) = blank();
        assert_eq!(profile.score(1, &abilities, &skills, &feats).unwrap(), 0);

        let feats = Feats::new().with(Feat::ImprovedInitiative);
        assert_eq!(profile.score(1, &abilities, &skills, &feats).unwrap(), 4);
    }

    #[test]
    fn positive_modifier_stacks_with_everything() {
        let profile = CheckProfile::new("sense motive", Ability::Wisdom)
            .with_skill(Skill::SenseMotive)
            .with_feat_bonus(Feat::Negotiator, 2);
        let abilities = AbilityScores::default().with(Ability::Wisdom, 18);
        let skills = SkillRanks::new().with(Skill::SenseMotive, 4);
        let feats = Feats::new().with(Feat::Negotiator);
        // 10 + 4 (wis) + 4 (ranks) + 2 (feat)
        assert_eq!(profile.score(10, &abilities, &skills, &feats).unwrap(), 20);
    }

    #[test]
    fn untrained_skill_contributes_nothing() {
        let profile =
            CheckProfile::new("spot", Ability::Wisdom).with_skill(Skill::Spot);
        let (abilities, skills, feats) = blank();
        assert_eq!(profile.score(1, &abilities, &skills, &feats).unwrap(), 0);
    }

    #[test]
    fn profile_serde_round_trip() {
        let profile = CheckProfile::new("initiative", Ability::Dexterity)
            .with_feat_bonus(Feat::ImprovedInitiative, 4);
        let json = serde_json::to_string(&profile).unwrap();
        let back: CheckProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }

    #[test]
    fn outcome_display() {
        let outcome = RollOutcome { roll: 14, score: 19 };
        assert_eq!(outcome.to_string(), "rolled 14, score 19");
    }
}
