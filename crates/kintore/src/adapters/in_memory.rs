//! In-memory workout repository.
//!
//! Implements [`WorkoutRepository`] over a vector guarded by a tokio `RwLock`.
//! Used by tests and local development; applies the same filter plan and
//! statistics rules as the SQL adapter.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{
    errors::RepositoryError, StatsPeriod, Workout, WorkoutFilter, WorkoutId, WorkoutStats,
    WorkoutStatus,
};
use crate::ports::WorkoutRepository;

#[derive(Debug)]
struct Store {
    rows: Vec<Workout>,
    next_id: i64,
}

/// In-memory repository. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryWorkoutRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryWorkoutRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Store a record exactly as given, without assigning an id.
    ///
    /// Lets tests plant backdated or malformed rows.
    pub async fn insert_raw(&self, workout: Workout) {
        let mut store = self.store.write().await;
        store.next_id = store.next_id.max(workout.id.value().saturating_add(1));
        store.rows.push(workout);
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryWorkoutRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryWorkoutRepository {
    async fn create(&self, workout: &Workout) -> Result<Workout, RepositoryError> {
        let mut store = self.store.write().await;
        let mut saved = workout.clone();
        saved.id = WorkoutId(store.next_id);
        store.next_id += 1;
        store.rows.push(saved.clone());
        Ok(saved)
    }

    async fn get_by_id(&self, id: WorkoutId) -> Result<Workout, RepositoryError> {
        let store = self.store.read().await;
        store
            .rows
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound { id })
    }

    async fn update(
        &self,
        workout: &Workout,
        read_updated_at: DateTime<Utc>,
    ) -> Result<Workout, RepositoryError> {
        let mut store = self.store.write().await;
        let row = store
            .rows
            .iter_mut()
            .find(|w| w.id == workout.id)
            .ok_or(RepositoryError::NotFound { id: workout.id })?;
        if row.updated_at != read_updated_at {
            return Err(RepositoryError::Conflict { id: workout.id });
        }

        let completed_at = row.completed_at.or(workout.completed_at);
        *row = workout.clone();
        row.completed_at = completed_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: WorkoutId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        let position = store
            .rows
            .iter()
            .position(|w| w.id == id)
            .ok_or(RepositoryError::NotFound { id })?;
        store.rows.remove(position);
        Ok(())
    }

    async fn list(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, RepositoryError> {
        let plan = filter.plan();
        let store = self.store.read().await;
        let mut workouts: Vec<Workout> = store
            .rows
            .iter()
            .filter(|w| plan.matches(w))
            .cloned()
            .collect();
        workouts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(workouts)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.store.read().await.rows.len() as i64)
    }

    async fn stats(&self, period: StatsPeriod) -> Result<WorkoutStats, RepositoryError> {
        let since = period.window_start(Utc::now());
        let store = self.store.read().await;

        let mut stats = WorkoutStats::empty(period);
        for workout in store.rows.iter().filter(|w| w.created_at >= since) {
            stats.total_workouts += 1;
            match workout.status {
                WorkoutStatus::Completed => {
                    stats.completed_workouts += 1;
                    stats.total_weight_lifted += workout.volume();
                }
                WorkoutStatus::Skipped => stats.skipped_workouts += 1,
                _ => {}
            }
            *stats.muscle_groups.entry(workout.muscle_group).or_insert(0) += 1;
        }
        Ok(stats)
    }

    async fn close(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
