//! Workout request/response DTOs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use kintore::{
    Difficulty, ExerciseKind, MuscleGroup, StatsPeriod, Workout, WorkoutFilter, WorkoutId,
    WorkoutStats, WorkoutStatus,
};

use crate::application::{CreateWorkoutRequest, UpdateWorkoutRequest};

// ============================================
// Request DTOs
// ============================================

/// Create workout request. Omitted fields take the server defaults.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWorkoutPayload {
    pub exercise: ExerciseKind,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub muscle_group: Option<MuscleGroup>,
    /// Defaults to 3
    pub sets: Option<i32>,
    /// Defaults to 10
    pub reps: Option<i32>,
    /// Kilograms, defaults to 0
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

impl From<CreateWorkoutPayload> for CreateWorkoutRequest {
    fn from(payload: CreateWorkoutPayload) -> Self {
        Self {
            exercise: payload.exercise,
            description: payload.description,
            difficulty: payload.difficulty,
            muscle_group: payload.muscle_group,
            sets: payload.sets,
            reps: payload.reps,
            weight: payload.weight,
            notes: payload.notes,
        }
    }
}

/// Update workout request. Omitted fields are left unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateWorkoutPayload {
    pub exercise: ExerciseKind,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub muscle_group: Option<MuscleGroup>,
    pub status: Option<WorkoutStatus>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

impl UpdateWorkoutPayload {
    pub fn into_request(self, id: i64) -> UpdateWorkoutRequest {
        UpdateWorkoutRequest {
            id: WorkoutId(id),
            exercise: self.exercise,
            description: self.description,
            difficulty: self.difficulty,
            muscle_group: self.muscle_group,
            status: self.status,
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
            notes: self.notes,
        }
    }
}

/// List filters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WorkoutListQuery {
    pub status: Option<WorkoutStatus>,
    pub difficulty: Option<Difficulty>,
    pub muscle_group: Option<MuscleGroup>,
}

impl From<WorkoutListQuery> for WorkoutFilter {
    fn from(query: WorkoutListQuery) -> Self {
        Self {
            status: query.status,
            difficulty: query.difficulty,
            muscle_group: query.muscle_group,
        }
    }
}

/// Stats window
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsQuery {
    /// "today", "week" or "month"; anything else means the last 30 days
    pub period: Option<String>,
}

// ============================================
// Response DTOs
// ============================================

/// Workout response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: i64,
    pub exercise: ExerciseKind,
    pub description: String,
    pub status: WorkoutStatus,
    pub difficulty: Difficulty,
    pub muscle_group: MuscleGroup,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id.value(),
            exercise: workout.exercise,
            description: workout.description,
            status: workout.status,
            difficulty: workout.difficulty,
            muscle_group: workout.muscle_group,
            sets: workout.sets,
            reps: workout.reps,
            weight: workout.weight,
            notes: workout.notes,
            created_at: workout.created_at,
            updated_at: workout.updated_at,
            completed_at: workout.completed_at,
        }
    }
}

/// Workout count
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkoutCountResponse {
    pub count: i64,
}

/// Aggregate statistics for one window
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkoutStatsResponse {
    pub period: StatsPeriod,
    pub total_workouts: i64,
    pub completed_workouts: i64,
    pub skipped_workouts: i64,
    /// Sum of weight x sets x reps over completed workouts
    pub total_weight_lifted: f64,
    /// Workout count keyed by muscle group name
    pub muscle_groups: BTreeMap<String, i64>,
}

impl From<WorkoutStats> for WorkoutStatsResponse {
    fn from(stats: WorkoutStats) -> Self {
        Self {
            period: stats.period,
            total_workouts: stats.total_workouts,
            completed_workouts: stats.completed_workouts,
            skipped_workouts: stats.skipped_workouts,
            total_weight_lifted: stats.total_weight_lifted,
            muscle_groups: stats
                .muscle_groups
                .into_iter()
                .map(|(group, count)| (group.to_string(), count))
                .collect(),
        }
    }
}
