//! Tracing implementation of WorkoutEventSink

use kintore::{WorkoutEvent, WorkoutEventSink};

/// Renders workout events as structured `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl WorkoutEventSink for TracingEventSink {
    fn emit(&self, event: WorkoutEvent) {
        match event {
            WorkoutEvent::Created {
                id,
                exercise,
                difficulty,
                sets,
                reps,
                weight,
            } => tracing::info!(
                workout_id = id.value(),
                exercise = exercise.label(),
                difficulty = %difficulty,
                sets,
                reps,
                weight,
                "Created workout"
            ),
            WorkoutEvent::Updated { id, exercise } => tracing::info!(
                workout_id = id.value(),
                exercise = exercise.label(),
                "Updated workout"
            ),
            WorkoutEvent::StatusChanged {
                id,
                exercise,
                from,
                to,
            } => tracing::info!(
                workout_id = id.value(),
                exercise = exercise.label(),
                from = %from,
                to = %to,
                "Workout status changed"
            ),
            WorkoutEvent::Completed { id, exercise } => tracing::info!(
                workout_id = id.value(),
                exercise = exercise.label(),
                "Workout completed"
            ),
            WorkoutEvent::Skipped { id, exercise } => tracing::info!(
                workout_id = id.value(),
                exercise = exercise.label(),
                "Workout skipped"
            ),
            WorkoutEvent::DeletingCompleted { id, exercise } => tracing::warn!(
                workout_id = id.value(),
                exercise = exercise.label(),
                "Deleting a completed workout"
            ),
            WorkoutEvent::Deleted { id, exercise } => tracing::info!(
                workout_id = id.value(),
                exercise = exercise.label(),
                "Deleted workout"
            ),
            WorkoutEvent::Listed { fetched, retained } => {
                if retained < fetched {
                    tracing::warn!(
                        fetched,
                        retained,
                        "Dropped malformed workouts from listing"
                    );
                } else {
                    tracing::debug!(fetched, "Listed workouts");
                }
            }
            WorkoutEvent::HighIntensityScanned { total, matched } => {
                tracing::debug!(total, matched, "Scanned for high intensity workouts")
            }
            WorkoutEvent::OperationFailed { op, message } => {
                tracing::error!(op, error = %message, "Workout operation failed")
            }
        }
    }
}
