//! MuscleGroup - Target body region

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Target muscle group. `Unspecified` is a legitimate value here.
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
pub enum MuscleGroup {
    #[default]
    Unspecified,
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Abs,
    Core,
    Glutes,
    Cardio,
    FullBody,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 11] = [
        MuscleGroup::Unspecified,
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Abs,
        MuscleGroup::Core,
        MuscleGroup::Glutes,
        MuscleGroup::Cardio,
        MuscleGroup::FullBody,
    ];

    pub fn code(self) -> i32 {
        match self {
            MuscleGroup::Unspecified => 0,
            MuscleGroup::Chest => 1,
            MuscleGroup::Back => 2,
            MuscleGroup::Legs => 3,
            MuscleGroup::Shoulders => 4,
            MuscleGroup::Arms => 5,
            MuscleGroup::Abs => 6,
            MuscleGroup::Core => 7,
            MuscleGroup::Glutes => 8,
            MuscleGroup::Cardio => 9,
            MuscleGroup::FullBody => 10,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            MuscleGroup::Unspecified => "Unspecified",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Core => "Core",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Cardio => "Cardio",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MuscleGroup::Unspecified => write!(f, "unspecified"),
            MuscleGroup::Chest => write!(f, "chest"),
            MuscleGroup::Back => write!(f, "back"),
            MuscleGroup::Legs => write!(f, "legs"),
            MuscleGroup::Shoulders => write!(f, "shoulders"),
            MuscleGroup::Arms => write!(f, "arms"),
            MuscleGroup::Abs => write!(f, "abs"),
            MuscleGroup::Core => write!(f, "core"),
            MuscleGroup::Glutes => write!(f, "glutes"),
            MuscleGroup::Cardio => write!(f, "cardio"),
            MuscleGroup::FullBody => write!(f, "full_body"),
        }
    }
}

impl std::str::FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unspecified" => Ok(MuscleGroup::Unspecified),
            "chest" => Ok(MuscleGroup::Chest),
            "back" => Ok(MuscleGroup::Back),
            "legs" => Ok(MuscleGroup::Legs),
            "shoulders" => Ok(MuscleGroup::Shoulders),
            "arms" => Ok(MuscleGroup::Arms),
            "abs" => Ok(MuscleGroup::Abs),
            "core" => Ok(MuscleGroup::Core),
            "glutes" => Ok(MuscleGroup::Glutes),
            "cardio" => Ok(MuscleGroup::Cardio),
            "full_body" => Ok(MuscleGroup::FullBody),
            _ => Err(format!("Unknown muscle group: {}", s)),
        }
    }
}
