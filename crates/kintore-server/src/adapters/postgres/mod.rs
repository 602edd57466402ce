//! PostgreSQL Repository Implementations

mod workout_repository;

pub use workout_repository::PgWorkoutRepository;
