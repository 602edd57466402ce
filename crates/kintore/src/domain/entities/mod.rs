//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Workout: a single logged training record
//! - WorkoutFilter: listing query descriptor
//! - WorkoutStats: windowed aggregate over workouts

mod stats;
mod workout;
mod workout_filter;

pub use stats::*;
pub use workout::*;
pub use workout_filter::*;
