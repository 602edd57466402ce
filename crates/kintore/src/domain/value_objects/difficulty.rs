//! Difficulty - Training intensity tier

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Four ordered intensity tiers
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Beast,
}

impl Difficulty {
    pub fn code(self) -> i32 {
        match self {
            Difficulty::Beginner => 0,
            Difficulty::Intermediate => 1,
            Difficulty::Advanced => 2,
            Difficulty::Beast => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Difficulty::Beginner),
            1 => Some(Difficulty::Intermediate),
            2 => Some(Difficulty::Advanced),
            3 => Some(Difficulty::Beast),
            _ => None,
        }
    }

    /// Advanced and Beast count as high intensity
    pub fn is_high(self) -> bool {
        matches!(self, Difficulty::Advanced | Difficulty::Beast)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
            Difficulty::Beast => write!(f, "beast"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "beast" => Ok(Difficulty::Beast),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}
