//! The resolution engine: checks, attacks, and damage.
//!
//! A [`Resolver`] borrows the four boundary collaborators for the duration
//! of a call and retains nothing between calls; every operation re-reads
//! the providers and draws fresh randomness, so given fixed draws and
//! fixed provider responses each call is deterministic.

use quarrel_core::EntityId;

use crate::attack::{AttackOutcome, CriticalState};
use crate::check::{CheckProfile, RollOutcome};
use crate::dice::Die;
use crate::error::{EngineError, EngineResult};
use crate::preset;
use crate::provider::{AttributeProvider, FeatProvider, RandomSource, SkillProvider};

/// Resolves checks, attacks, and damage against borrowed providers.
pub struct Resolver<'a> {
    random: &'a mut dyn RandomSource,
    attributes: &'a dyn AttributeProvider,
    skills: &'a dyn SkillProvider,
    feats: &'a dyn FeatProvider,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the four collaborators.
    pub fn new(
        random: &'a mut dyn RandomSource,
        attributes: &'a dyn AttributeProvider,
        skills: &'a dyn SkillProvider,
        feats: &'a dyn FeatProvider,
    ) -> Self {
        Self {
            random,
            attributes,
            skills,
            feats,
        }
    }

    /// Roll a check for the entity against the given profile.
    ///
    /// Draws one d20, then reads the entity's abilities, skills, and feats
    /// and scores the roll per the profile's template.
    pub fn check(
        &mut self,
        entity: EntityId,
        profile: &CheckProfile,
    ) -> EngineResult<RollOutcome> {
        let roll = self.random.draw(entity, Die::D20.sides())?;
        let abilities = self.attributes.ability_scores(entity)?;
        let skills = self.skills.skill_ranks(entity)?;
        let feats = self.feats.feats(entity)?;
        let score = profile.score(roll, &abilities, &skills, &feats)?;
        tracing::debug!(entity = %entity, check = %profile.name, roll, score, "check resolved");
        Ok(RollOutcome { roll, score })
    }

    /// Roll initiative for the entity.
    pub fn initiative(&mut self, entity: EntityId) -> EngineResult<RollOutcome> {
        self.check(entity, &preset::initiative())
    }

    /// Roll a sense motive check for the entity.
    pub fn sense_motive(&mut self, entity: EntityId) -> EngineResult<RollOutcome> {
        self.check(entity, &preset::sense_motive())
    }

    /// Resolve a full attack: hit or miss, threat detection, and critical
    /// confirmation.
    ///
    /// The threat range is `[20 + threat_offset, 20]` on the natural roll.
    /// A natural 1 always misses and consumes only the one draw. A hit in
    /// the threat range draws a second confirmation d20 — strictly after
    /// the threat is established, never speculatively.
    pub fn attack(
        &mut self,
        entity: EntityId,
        attack_bonus: i32,
        threat_offset: i32,
        critical_multiplier_bonus: u32,
        armor_class: u32,
    ) -> EngineResult<AttackOutcome> {
        let roll = self.random.draw(entity, Die::D20.sides())?;
        if roll == 1 {
            tracing::debug!(entity = %entity, "natural 1, automatic miss");
            return Ok(AttackOutcome {
                roll,
                score: 0,
                critical: CriticalState::None,
                damage_multiplier: 0,
            });
        }

        let score = attack_score(roll, attack_bonus)?;
        let hit = i64::from(score) >= i64::from(armor_class);
        let threat = i64::from(roll) >= 20 + i64::from(threat_offset);

        let (critical, damage_multiplier) = if !hit {
            (CriticalState::None, 0)
        } else if !threat {
            (CriticalState::None, 1)
        } else {
            let confirmation_roll = self.random.draw(entity, Die::D20.sides())?;
            let confirmation = attack_score(confirmation_roll, attack_bonus)?;
            if i64::from(confirmation) >= i64::from(armor_class) {
                let multiplier = 1u32
                    .checked_add(critical_multiplier_bonus)
                    .ok_or(EngineError::ArithmeticOverflow("damage multiplier"))?;
                tracing::debug!(
                    entity = %entity,
                    roll,
                    confirmation,
                    multiplier,
                    "critical threat confirmed"
                );
                (CriticalState::Confirmed { roll, confirmation }, multiplier)
            } else {
                tracing::debug!(entity = %entity, roll, confirmation, "critical threat not confirmed");
                (CriticalState::Unconfirmed { roll }, 1)
            }
        };

        tracing::debug!(entity = %entity, roll, score, hit, damage_multiplier, "attack resolved");
        Ok(AttackOutcome {
            roll,
            score,
            critical,
            damage_multiplier,
        })
    }

    /// Roll damage: `dice` draws of `die`, plus `modifier`, floored at 1,
    /// then multiplied.
    ///
    /// The floor guards the dice-plus-modifier term only — a multiplier of
    /// 0 (a miss) yields 0. Parameters are validated before any draw is
    /// consumed.
    pub fn damage(
        &mut self,
        entity: EntityId,
        dice: u32,
        die: Die,
        modifier: i32,
        multiplier: u32,
    ) -> EngineResult<u32> {
        if dice < 1 {
            return Err(EngineError::InvalidParameter(
                "damage requires at least one die".to_string(),
            ));
        }
        if die.sides() < 1 {
            return Err(EngineError::InvalidParameter(format!(
                "cannot roll damage with {die}"
            )));
        }

        let mut sum: u64 = 0;
        for _ in 0..dice {
            let draw = self.random.draw(entity, die.sides())?;
            sum = sum
                .checked_add(u64::from(draw))
                .ok_or(EngineError::ArithmeticOverflow("damage dice sum"))?;
        }
        let sum =
            i64::try_from(sum).map_err(|_| EngineError::ArithmeticOverflow("damage dice sum"))?;
        let adjusted = (sum + i64::from(modifier)).max(1);
        let total = adjusted
            .checked_mul(i64::from(multiplier))
            .ok_or(EngineError::ArithmeticOverflow("damage total"))?;
        let total =
            u32::try_from(total).map_err(|_| EngineError::ArithmeticOverflow("damage total"))?;

        tracing::debug!(entity = %entity, dice, die = %die, modifier, multiplier, total, "damage resolved");
        Ok(total)
    }
}

/// `roll + attack_bonus` as a signed score, never clamped.
fn attack_score(roll: u32, attack_bonus: i32) -> EngineResult<i32> {
    i32::try_from(i64::from(roll) + i64::from(attack_bonus))
        .map_err(|_| EngineError::ArithmeticOverflow("attack score"))
}
