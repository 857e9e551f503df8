//! Polyhedral die types.
//!
//! A [`Die`] names how many faces a draw ranges over; the draws themselves
//! come from a [`RandomSource`](crate::provider::RandomSource). `Custom`
//! permits arbitrary face counts for damage expressions; operations that
//! consume dice validate `sides >= 1` before drawing.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die. All checks and attacks roll this.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of faces.
    Custom(u32),
}

impl Die {
    /// Returns the number of faces on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }
}

impl std::str::FromStr for Die {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d4" => Ok(Self::D4),
            "d6" => Ok(Self::D6),
            "d8" => Ok(Self::D8),
            "d10" => Ok(Self::D10),
            "d12" => Ok(Self::D12),
            "d20" => Ok(Self::D20),
            "d100" => Ok(Self::D100),
            other => {
                let sides = other
                    .strip_prefix('d')
                    .and_then(|n| n.parse::<u32>().ok())
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| {
                        EngineError::InvalidParameter(format!("not a die: \"{s}\""))
                    })?;
                Ok(Self::Custom(sides))
            }
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D20.sides(), 20);
        assert_eq!(Die::D100.sides(), 100);
        assert_eq!(Die::Custom(37).sides(), 37);
    }

    #[test]
    fn parse() {
        assert_eq!("d20".parse::<Die>().unwrap(), Die::D20);
        assert_eq!(" D6 ".parse::<Die>().unwrap(), Die::D6);
        assert_eq!("d37".parse::<Die>().unwrap(), Die::Custom(37));
        assert!("d0".parse::<Die>().is_err());
        assert!("goblin".parse::<Die>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Die::D12.to_string(), "d12");
        assert_eq!(Die::Custom(37).to_string(), "d37");
    }
}
