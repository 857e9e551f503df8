//! Attack outcome types.
//!
//! The two-stage critical flow is a small state machine: a natural roll in
//! the threat range on a hit becomes a threat, and a second confirmation
//! roll decides whether it is realized. [`CriticalState`] keeps "no
//! critical occurred" structurally distinct from "threat rolled but not
//! confirmed"; the sentinel-style accessors project both back onto the
//! flat zero-field shape for callers that want it.

use serde::{Deserialize, Serialize};

/// Where the critical-hit state machine ended up for one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalState {
    /// No threat occurred (miss, or a hit outside the threat range).
    None,
    /// The natural roll was a threat on a hit, but the confirmation roll
    /// failed; the attack falls back to a normal hit.
    Unconfirmed {
        /// The natural value of the threatening attack roll.
        roll: u32,
    },
    /// The threat was confirmed: the attack is a critical hit.
    Confirmed {
        /// The natural value of the threatening attack roll.
        roll: u32,
        /// The adjusted score of the confirmation roll.
        confirmation: i32,
    },
}

/// The full result of one attack resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// The natural die value of the attack roll.
    pub roll: u32,
    /// `roll + attack_bonus`, unclamped, except a natural 1 which scores 0.
    pub score: i32,
    /// Outcome of the critical-hit state machine.
    pub critical: CriticalState,
    /// 0 on a miss, 1 on a normal hit, `1 + bonus` on a confirmed critical.
    pub damage_multiplier: u32,
}

impl AttackOutcome {
    /// Returns true if the attack landed at all.
    pub fn is_hit(&self) -> bool {
        self.damage_multiplier > 0
    }

    /// The threatening natural roll, or 0 if the roll never became a
    /// threat on a hit.
    pub fn critical_roll(&self) -> u32 {
        match self.critical {
            CriticalState::None => 0,
            CriticalState::Unconfirmed { roll } | CriticalState::Confirmed { roll, .. } => roll,
        }
    }

    /// The adjusted confirmation score, or 0 if no critical was confirmed.
    pub fn critical_confirmation(&self) -> i32 {
        match self.critical {
            CriticalState::Confirmed { confirmation, .. } => confirmation,
            _ => 0,
        }
    }
}

impl std::fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.critical {
            CriticalState::Confirmed { .. } => {
                write!(f, "critical hit (x{})", self.damage_multiplier)
            }
            _ if self.is_hit() => write!(f, "hit ({} vs armor)", self.score),
            _ => write!(f, "miss ({})", self.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_project_sentinel_zeros() {
        let outcome = AttackOutcome {
            roll: 14,
            score: 15,
            critical: CriticalState::None,
            damage_multiplier: 1,
        };
        assert!(outcome.is_hit());
        assert_eq!(outcome.critical_roll(), 0);
        assert_eq!(outcome.critical_confirmation(), 0);
    }

    #[test]
    fn unconfirmed_threat_keeps_roll_but_not_confirmation() {
        let outcome = AttackOutcome {
            roll: 19,
            score: 20,
            critical: CriticalState::Unconfirmed { roll: 19 },
            damage_multiplier: 1,
        };
        assert_eq!(outcome.critical_roll(), 19);
        assert_eq!(outcome.critical_confirmation(), 0);
    }

    #[test]
    fn confirmed_threat_exposes_both() {
        let outcome = AttackOutcome {
            roll: 19,
            score: 20,
            critical: CriticalState::Confirmed {
                roll: 19,
                confirmation: 20,
            },
            damage_multiplier: 3,
        };
        assert_eq!(outcome.critical_roll(), 19);
        assert_eq!(outcome.critical_confirmation(), 20);
        assert_eq!(outcome.to_string(), "critical hit (x3)");
    }

    #[test]
    fn display_for_miss_and_hit() {
        let miss = AttackOutcome {
            roll: 10,
            score: 11,
            critical: CriticalState::None,
            damage_multiplier: 0,
        };
        assert_eq!(miss.to_string(), "miss (11)");

        let hit = AttackOutcome {
            roll: 14,
            score: 15,
            critical: CriticalState::None,
            damage_multiplier: 1,
        };
        assert_eq!(hit.to_string(), "hit (15 vs armor)");
    }

    #[test]
    fn serde_round_trip() {
        let outcome = AttackOutcome {
            roll: 19,
            score: 20,
            critical: CriticalState::Confirmed {
                roll: 19,
                confirmation: 20,
            },
            damage_multiplier: 3,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: AttackOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
