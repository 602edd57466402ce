//! Workout Event Sink Port
//!
//! Use-case code reports what happened through this port instead of
//! writing to a log directly.

use crate::domain::{Difficulty, ExerciseKind, WorkoutId, WorkoutStatus};

/// Something noteworthy that happened while handling a workout request
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutEvent {
    Created {
        id: WorkoutId,
        exercise: ExerciseKind,
        difficulty: Difficulty,
        sets: i32,
        reps: i32,
        weight: f64,
    },
    Updated {
        id: WorkoutId,
        exercise: ExerciseKind,
    },
    StatusChanged {
        id: WorkoutId,
        exercise: ExerciseKind,
        from: WorkoutStatus,
        to: WorkoutStatus,
    },
    Completed {
        id: WorkoutId,
        exercise: ExerciseKind,
    },
    Skipped {
        id: WorkoutId,
        exercise: ExerciseKind,
    },
    /// About to delete a workout that was already completed
    DeletingCompleted {
        id: WorkoutId,
        exercise: ExerciseKind,
    },
    Deleted {
        id: WorkoutId,
        exercise: ExerciseKind,
    },
    Listed {
        fetched: usize,
        retained: usize,
    },
    HighIntensityScanned {
        total: usize,
        matched: usize,
    },
    OperationFailed {
        op: &'static str,
        message: String,
    },
}

/// Receives workout events
pub trait WorkoutEventSink: Send + Sync {
    fn emit(&self, event: WorkoutEvent);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl WorkoutEventSink for NoopEventSink {
    fn emit(&self, _event: WorkoutEvent) {}
}
