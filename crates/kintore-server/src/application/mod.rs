//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the event sink.

mod workout_service;

pub use workout_service::{
    CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutService, HIGH_INTENSITY_MIN_WEIGHT,
};
