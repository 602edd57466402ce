//! Workout Repository Port
//!
//! Abstract interface for Workout persistence operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    errors::RepositoryError, StatsPeriod, Workout, WorkoutFilter, WorkoutId, WorkoutStats,
};

/// Repository interface for Workout entities
///
/// `get_by_id`, `update` and `delete` report a missing id as
/// [`RepositoryError::NotFound`]. Mutations are atomic.
///
/// `update` is a compare-and-swap on `updated_at`: it only writes when the
/// stored record still carries the `updated_at` the caller read, and reports
/// [`RepositoryError::Conflict`] otherwise. A stored `completed_at` is never
/// cleared or replaced.
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Insert a new workout; the returned record carries the assigned id
    async fn create(&self, workout: &Workout) -> Result<Workout, RepositoryError>;

    /// Find a workout by ID
    async fn get_by_id(&self, id: WorkoutId) -> Result<Workout, RepositoryError>;

    /// Overwrite an existing workout read at `read_updated_at`; returns the stored record
    async fn update(
        &self,
        workout: &Workout,
        read_updated_at: DateTime<Utc>,
    ) -> Result<Workout, RepositoryError>;

    /// Delete a workout by ID
    async fn delete(&self, id: WorkoutId) -> Result<(), RepositoryError>;

    /// List workouts matching the filter, newest first
    async fn list(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, RepositoryError>;

    /// Count all workouts
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Aggregate statistics over workouts created within the period
    async fn stats(&self, period: StatsPeriod) -> Result<WorkoutStats, RepositoryError>;

    /// Release underlying resources
    async fn close(&self) -> Result<(), RepositoryError>;
}
