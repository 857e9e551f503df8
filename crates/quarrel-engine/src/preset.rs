//! Pre-configured check profiles.
//!
//! These produce the same [`CheckProfile`] a host could assemble by hand
//! or deserialize from data. Keeping the named checks here, built on the
//! one shared template, prevents the scoring formula from drifting
//! between them.

use quarrel_core::{Ability, Feat, Skill};

use crate::check::CheckProfile;

/// Initiative: dexterity-modified d20, +4 with Improved Initiative.
/// No skill applies.
pub fn initiative() -> CheckProfile {
    CheckProfile::new("initiative", Ability::Dexterity)
        .with_feat_bonus(Feat::ImprovedInitiative, 4)
}

/// Sense motive: wisdom-modified d20 plus sense motive ranks,
/// +2 with Negotiator.
pub fn sense_motive() -> CheckProfile {
    CheckProfile::new("sense motive", Ability::Wisdom)
        .with_skill(Skill::SenseMotive)
        .with_feat_bonus(Feat::Negotiator, 2)
}

/// Listen: wisdom-modified d20 plus listen ranks, +2 with Alertness.
pub fn listen() -> CheckProfile {
    CheckProfile::new("listen", Ability::Wisdom)
        .with_skill(Skill::Listen)
        .with_feat_bonus(Feat::Alertness, 2)
}

/// Spot: wisdom-modified d20 plus spot ranks, +2 with Alertness.
pub fn spot() -> CheckProfile {
    CheckProfile::new("spot", Ability::Wisdom)
        .with_skill(Skill::Spot)
        .with_feat_bonus(Feat::Alertness, 2)
}
