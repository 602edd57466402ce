//! ExerciseKind - Category of physical movement

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Exercise performed in a workout.
///
/// `Unspecified` is the zero sentinel: it is rejected on input and never
/// valid on a persisted record.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    #[default]
    Unspecified,
    BenchPress,
    Squat,
    Deadlift,
    DumbbellShoulderPress,
    PullUp,
    SideRaise,
    OneHandRow,
    HighPull,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 9] = [
        ExerciseKind::Unspecified,
        ExerciseKind::BenchPress,
        ExerciseKind::Squat,
        ExerciseKind::Deadlift,
        ExerciseKind::DumbbellShoulderPress,
        ExerciseKind::PullUp,
        ExerciseKind::SideRaise,
        ExerciseKind::OneHandRow,
        ExerciseKind::HighPull,
    ];

    /// Integer code stored in the `exercise` column
    pub fn code(self) -> i32 {
        match self {
            ExerciseKind::Unspecified => 0,
            ExerciseKind::BenchPress => 1,
            ExerciseKind::Squat => 2,
            ExerciseKind::Deadlift => 3,
            ExerciseKind::DumbbellShoulderPress => 4,
            ExerciseKind::PullUp => 5,
            ExerciseKind::SideRaise => 6,
            ExerciseKind::OneHandRow => 7,
            ExerciseKind::HighPull => 8,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn is_specified(self) -> bool {
        self != ExerciseKind::Unspecified
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            ExerciseKind::Unspecified => "Unspecified",
            ExerciseKind::BenchPress => "Bench Press",
            ExerciseKind::Squat => "Squat",
            ExerciseKind::Deadlift => "Deadlift",
            ExerciseKind::DumbbellShoulderPress => "Dumbbell Shoulder Press",
            ExerciseKind::PullUp => "Pull-up",
            ExerciseKind::SideRaise => "Side Raise",
            ExerciseKind::OneHandRow => "One-hand Row",
            ExerciseKind::HighPull => "High Pull",
        }
    }
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseKind::Unspecified => write!(f, "unspecified"),
            ExerciseKind::BenchPress => write!(f, "bench_press"),
            ExerciseKind::Squat => write!(f, "squat"),
            ExerciseKind::Deadlift => write!(f, "deadlift"),
            ExerciseKind::DumbbellShoulderPress => write!(f, "dumbbell_shoulder_press"),
            ExerciseKind::PullUp => write!(f, "pull_up"),
            ExerciseKind::SideRaise => write!(f, "side_raise"),
            ExerciseKind::OneHandRow => write!(f, "one_hand_row"),
            ExerciseKind::HighPull => write!(f, "high_pull"),
        }
    }
}

impl std::str::FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unspecified" => Ok(ExerciseKind::Unspecified),
            "bench_press" => Ok(ExerciseKind::BenchPress),
            "squat" => Ok(ExerciseKind::Squat),
            "deadlift" => Ok(ExerciseKind::Deadlift),
            "dumbbell_shoulder_press" => Ok(ExerciseKind::DumbbellShoulderPress),
            "pull_up" => Ok(ExerciseKind::PullUp),
            "side_raise" => Ok(ExerciseKind::SideRaise),
            "one_hand_row" => Ok(ExerciseKind::OneHandRow),
            "high_pull" => Ok(ExerciseKind::HighPull),
            _ => Err(format!("Unknown exercise: {}", s)),
        }
    }
}
