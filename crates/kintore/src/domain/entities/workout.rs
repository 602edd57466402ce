//! Workout - A single logged training record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Difficulty, ExerciseKind, MuscleGroup, WorkoutId, WorkoutStatus,
};

pub const DEFAULT_SETS: i32 = 3;
pub const DEFAULT_REPS: i32 = 10;
pub const DEFAULT_WEIGHT: f64 = 0.0;

/// Workout record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub exercise: ExerciseKind,
    pub description: String,
    pub status: WorkoutStatus,
    pub difficulty: Difficulty,
    pub muscle_group: MuscleGroup,
    pub sets: i32,
    pub reps: i32,
    /// Kilograms
    pub weight: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set once, the first time the workout reaches `Completed`
    pub completed_at: Option<DateTime<Utc>>,
}

impl Workout {
    /// Create an unsaved workout with server-side defaults
    pub fn new(exercise: ExerciseKind) -> Self {
        let now = Utc::now();
        Self {
            id: WorkoutId::UNASSIGNED,
            exercise,
            description: String::new(),
            status: WorkoutStatus::Planned,
            difficulty: Difficulty::Beginner,
            muscle_group: MuscleGroup::Unspecified,
            sets: DEFAULT_SETS,
            reps: DEFAULT_REPS,
            weight: DEFAULT_WEIGHT,
            notes: String::new(),
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Training load: weight x sets x reps
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.sets) * f64::from(self.reps)
    }

    /// Base invariants every persisted workout must satisfy
    pub fn is_well_formed(&self) -> bool {
        self.exercise.is_specified() && self.id.is_valid()
    }

    pub fn is_completed(&self) -> bool {
        self.status == WorkoutStatus::Completed
    }

    /// Apply a status change, stamping `completed_at` on the first completion.
    ///
    /// Returns true when this call set the completion timestamp.
    pub fn transition_to(&mut self, status: WorkoutStatus, now: DateTime<Utc>) -> bool {
        self.status = status;
        if status == WorkoutStatus::Completed && self.completed_at.is_none() {
            self.completed_at = Some(now);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_workout_defaults() {
        let workout = Workout::new(ExerciseKind::Squat);
        assert_eq!(workout.id, WorkoutId::UNASSIGNED);
        assert_eq!(workout.status, WorkoutStatus::Planned);
        assert_eq!(workout.difficulty, Difficulty::Beginner);
        assert_eq!(workout.sets, 3);
        assert_eq!(workout.reps, 10);
        assert_eq!(workout.weight, 0.0);
        assert!(workout.completed_at.is_none());
        assert_eq!(workout.created_at, workout.updated_at);
    }

    #[test]
    fn test_volume() {
        let mut workout = Workout::new(ExerciseKind::BenchPress);
        workout.weight = 60.0;
        workout.sets = 5;
        workout.reps = 5;
        assert_eq!(workout.volume(), 1500.0);
    }

    #[test]
    fn test_unsaved_workout_is_not_well_formed() {
        let mut workout = Workout::new(ExerciseKind::Deadlift);
        assert!(!workout.is_well_formed());
        workout.id = WorkoutId(7);
        assert!(workout.is_well_formed());
        workout.exercise = ExerciseKind::Unspecified;
        assert!(!workout.is_well_formed());
    }

    #[test]
    fn test_completion_is_stamped_once() {
        let mut workout = Workout::new(ExerciseKind::PullUp);
        let first = Utc::now();
        assert!(workout.transition_to(WorkoutStatus::Completed, first));
        assert_eq!(workout.completed_at, Some(first));

        // Reopening keeps the first stamp
        assert!(!workout.transition_to(WorkoutStatus::Planned, first + Duration::minutes(5)));
        assert!(!workout.transition_to(WorkoutStatus::Completed, first + Duration::hours(1)));
        assert_eq!(workout.completed_at, Some(first));
    }

    #[test]
    fn test_json_uses_snake_case_enums() {
        let mut workout = Workout::new(ExerciseKind::DumbbellShoulderPress);
        workout.id = WorkoutId(3);
        workout.muscle_group = MuscleGroup::FullBody;

        let json = serde_json::to_value(&workout).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["exercise"], "dumbbell_shoulder_press");
        assert_eq!(json["status"], "planned");
        assert_eq!(json["muscle_group"], "full_body");
        assert!(json["completed_at"].is_null());
    }
}
