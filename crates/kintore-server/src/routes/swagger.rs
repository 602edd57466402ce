//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateWorkoutPayload, UpdateWorkoutPayload, WorkoutCountResponse, WorkoutResponse,
    WorkoutStatsResponse,
};
use kintore::{Difficulty, ExerciseKind, MuscleGroup, StatsPeriod, WorkoutStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Workout endpoints
        super::workout::list_workouts,
        super::workout::create_workout,
        super::workout::get_workout,
        super::workout::update_workout,
        super::workout::delete_workout,
        super::workout::list_high_intensity,
        super::workout::count_workouts,
        // Stats endpoints
        super::stats::get_stats,
    ),
    info(
        title = "Kintore API",
        version = "0.1.0",
        description = "Workout logging: training records, status tracking and windowed statistics.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Workout", description = "Workout records"),
        (name = "Stats", description = "Aggregate statistics"),
    ),
    components(
        schemas(
            // Enums
            ExerciseKind,
            WorkoutStatus,
            Difficulty,
            MuscleGroup,
            StatsPeriod,
            // Workout
            CreateWorkoutPayload,
            UpdateWorkoutPayload,
            WorkoutResponse,
            WorkoutCountResponse,
            // Stats
            WorkoutStatsResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_workout_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/kintore/workouts",
            "/kintore/workouts/{id}",
            "/kintore/workouts/high-intensity",
            "/kintore/workouts/count",
            "/kintore/stats",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
