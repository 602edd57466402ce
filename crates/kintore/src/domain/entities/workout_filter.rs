//! WorkoutFilter - Listing query descriptor

use serde::{Deserialize, Serialize};

use crate::domain::entities::Workout;
use crate::domain::value_objects::{Difficulty, MuscleGroup, WorkoutStatus};

/// Optional equality filters for listing workouts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutFilter {
    pub status: Option<WorkoutStatus>,
    pub difficulty: Option<Difficulty>,
    pub muscle_group: Option<MuscleGroup>,
}

/// Predicates a repository applies for a [`WorkoutFilter`].
///
/// The two combined forms match the composite indexes on the workouts table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPlan {
    /// `status = ? AND difficulty = ?`; any muscle group filter is not applied
    StatusAndDifficulty(WorkoutStatus, Difficulty),
    /// `status = ? AND muscle_group = ?`
    StatusAndMuscleGroup(WorkoutStatus, MuscleGroup),
    /// Each present filter as its own equality predicate
    Each {
        status: Option<WorkoutStatus>,
        difficulty: Option<Difficulty>,
        muscle_group: Option<MuscleGroup>,
    },
}

impl WorkoutFilter {
    pub fn with_status(mut self, status: WorkoutStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_muscle_group(mut self, muscle_group: MuscleGroup) -> Self {
        self.muscle_group = Some(muscle_group);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.difficulty.is_none() && self.muscle_group.is_none()
    }

    pub fn plan(&self) -> FilterPlan {
        match (self.status, self.difficulty, self.muscle_group) {
            (Some(status), Some(difficulty), _) => {
                FilterPlan::StatusAndDifficulty(status, difficulty)
            }
            (Some(status), None, Some(muscle_group)) => {
                FilterPlan::StatusAndMuscleGroup(status, muscle_group)
            }
            (status, difficulty, muscle_group) => FilterPlan::Each {
                status,
                difficulty,
                muscle_group,
            },
        }
    }
}

impl FilterPlan {
    pub fn matches(&self, workout: &Workout) -> bool {
        match *self {
            FilterPlan::StatusAndDifficulty(status, difficulty) => {
                workout.status == status && workout.difficulty == difficulty
            }
            FilterPlan::StatusAndMuscleGroup(status, muscle_group) => {
                workout.status == status && workout.muscle_group == muscle_group
            }
            FilterPlan::Each {
                status,
                difficulty,
                muscle_group,
            } => {
                status.map_or(true, |s| workout.status == s)
                    && difficulty.map_or(true, |d| workout.difficulty == d)
                    && muscle_group.map_or(true, |m| workout.muscle_group == m)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ExerciseKind;

    #[test]
    fn test_status_and_difficulty_take_precedence() {
        let filter = WorkoutFilter::default()
            .with_status(WorkoutStatus::Completed)
            .with_difficulty(Difficulty::Beast)
            .with_muscle_group(MuscleGroup::Legs);

        assert_eq!(
            filter.plan(),
            FilterPlan::StatusAndDifficulty(WorkoutStatus::Completed, Difficulty::Beast)
        );

        // Muscle group is not part of the combined predicate
        let mut workout = Workout::new(ExerciseKind::Squat);
        workout.status = WorkoutStatus::Completed;
        workout.difficulty = Difficulty::Beast;
        workout.muscle_group = MuscleGroup::Chest;
        assert!(filter.plan().matches(&workout));
    }

    #[test]
    fn test_status_and_muscle_group_plan() {
        let filter = WorkoutFilter::default()
            .with_status(WorkoutStatus::Planned)
            .with_muscle_group(MuscleGroup::Back);
        assert_eq!(
            filter.plan(),
            FilterPlan::StatusAndMuscleGroup(WorkoutStatus::Planned, MuscleGroup::Back)
        );
    }

    #[test]
    fn test_difficulty_and_muscle_group_apply_independently() {
        let filter = WorkoutFilter::default()
            .with_difficulty(Difficulty::Advanced)
            .with_muscle_group(MuscleGroup::Back);
        let plan = filter.plan();

        let mut workout = Workout::new(ExerciseKind::OneHandRow);
        workout.difficulty = Difficulty::Advanced;
        workout.muscle_group = MuscleGroup::Back;
        assert!(plan.matches(&workout));

        workout.muscle_group = MuscleGroup::Arms;
        assert!(!plan.matches(&workout));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = WorkoutFilter::default();
        assert!(filter.is_empty());
        assert!(filter.plan().matches(&Workout::new(ExerciseKind::HighPull)));
    }
}
