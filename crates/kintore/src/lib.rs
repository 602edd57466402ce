//! Kintore Domain Library
//!
//! Core domain types and interfaces for the Kintore workout logging service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Workout, WorkoutFilter, WorkoutStats
//!   - `value_objects/`: ExerciseKind, WorkoutStatus, Difficulty, MuscleGroup, StatsPeriod
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Event sink interface
//!
//! - **Adapters** (`adapters/`): In-memory repository
//!
//! # Usage
//!
//! ```rust,ignore
//! use kintore::{InMemoryWorkoutRepository, Workout, WorkoutRepository};
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use adapters::InMemoryWorkoutRepository;
pub use domain::{
    Difficulty, DomainError, ExerciseKind, FieldViolation, FilterPlan, MuscleGroup,
    RepositoryError, StatsPeriod, ValidationErrors, Workout, WorkoutError, WorkoutFilter,
    WorkoutId, WorkoutStats, WorkoutStatus, DEFAULT_REPS, DEFAULT_SETS, DEFAULT_WEIGHT,
};
pub use ports::{NoopEventSink, WorkoutEvent, WorkoutEventSink, WorkoutRepository};
