//! WorkoutStats - Windowed aggregate over workouts

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MuscleGroup, StatsPeriod};

/// Aggregate statistics, recomputed on every request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStats {
    pub period: StatsPeriod,
    pub total_workouts: i64,
    pub completed_workouts: i64,
    pub skipped_workouts: i64,
    /// Sum of weight x sets x reps over completed workouts
    pub total_weight_lifted: f64,
    /// Workout count per muscle group, regardless of status
    pub muscle_groups: BTreeMap<MuscleGroup, i64>,
}

impl WorkoutStats {
    pub fn empty(period: StatsPeriod) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }
}
