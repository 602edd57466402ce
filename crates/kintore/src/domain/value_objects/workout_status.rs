//! WorkoutStatus - Lifecycle status of a workout

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Workout lifecycle status.
///
/// Usual flow is Planned -> InProgress -> Completed, or Planned -> Skipped,
/// but any explicit transition is accepted.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Skipped,
}

impl WorkoutStatus {
    pub fn code(self) -> i32 {
        match self {
            WorkoutStatus::Planned => 0,
            WorkoutStatus::InProgress => 1,
            WorkoutStatus::Completed => 2,
            WorkoutStatus::Skipped => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(WorkoutStatus::Planned),
            1 => Some(WorkoutStatus::InProgress),
            2 => Some(WorkoutStatus::Completed),
            3 => Some(WorkoutStatus::Skipped),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutStatus::Planned => write!(f, "planned"),
            WorkoutStatus::InProgress => write!(f, "in_progress"),
            WorkoutStatus::Completed => write!(f, "completed"),
            WorkoutStatus::Skipped => write!(f, "skipped"),
        }
    }
}

impl std::str::FromStr for WorkoutStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(WorkoutStatus::Planned),
            "in_progress" => Ok(WorkoutStatus::InProgress),
            "completed" => Ok(WorkoutStatus::Completed),
            "skipped" => Ok(WorkoutStatus::Skipped),
            _ => Err(format!("Unknown workout status: {}", s)),
        }
    }
}
