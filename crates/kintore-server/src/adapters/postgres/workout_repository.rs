//! PostgreSQL implementation of WorkoutRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use kintore::{
    Difficulty, ExerciseKind, FilterPlan, MuscleGroup, RepositoryError, StatsPeriod, Workout,
    WorkoutFilter, WorkoutId, WorkoutRepository, WorkoutStats, WorkoutStatus,
};

const SELECT_WORKOUTS: &str = "SELECT id, exercise, status, difficulty, muscle_group, sets, reps, \
     weight, description, notes, created_at, updated_at, completed_at FROM workouts";

/// PostgreSQL implementation of WorkoutRepository
pub struct PgWorkoutRepository {
    pool: PgPool,
}

impl PgWorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct WorkoutRow {
    id: i64,
    exercise: i32,
    status: i32,
    difficulty: i32,
    muscle_group: i32,
    sets: i32,
    reps: i32,
    weight: f64,
    description: String,
    notes: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TryFrom<WorkoutRow> for Workout {
    type Error = RepositoryError;

    // Unknown exercise and muscle group codes become Unspecified so that the
    // service's integrity checks reject the record instead of the query.
    fn try_from(row: WorkoutRow) -> Result<Self, Self::Error> {
        let status = WorkoutStatus::from_code(row.status).ok_or_else(|| {
            RepositoryError::Decode(format!(
                "workout {}: unknown status code {}",
                row.id, row.status
            ))
        })?;
        let difficulty = Difficulty::from_code(row.difficulty).ok_or_else(|| {
            RepositoryError::Decode(format!(
                "workout {}: unknown difficulty code {}",
                row.id, row.difficulty
            ))
        })?;

        Ok(Self {
            id: WorkoutId(row.id),
            exercise: ExerciseKind::from_code(row.exercise).unwrap_or_default(),
            description: row.description,
            status,
            difficulty,
            muscle_group: MuscleGroup::from_code(row.muscle_group).unwrap_or_default(),
            sets: row.sets,
            reps: row.reps,
            weight: row.weight,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
            completed_at: row.completed_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total_workouts: i64,
    completed_workouts: i64,
    skipped_workouts: i64,
    total_weight_lifted: f64,
}

/// Column equality predicates for a filter plan, in query order
fn predicates(plan: FilterPlan) -> Vec<(&'static str, i32)> {
    match plan {
        FilterPlan::StatusAndDifficulty(status, difficulty) => {
            vec![("status", status.code()), ("difficulty", difficulty.code())]
        }
        FilterPlan::StatusAndMuscleGroup(status, muscle_group) => {
            vec![("status", status.code()), ("muscle_group", muscle_group.code())]
        }
        FilterPlan::Each {
            status,
            difficulty,
            muscle_group,
        } => [
            ("status", status.map(WorkoutStatus::code)),
            ("difficulty", difficulty.map(Difficulty::code)),
            ("muscle_group", muscle_group.map(MuscleGroup::code)),
        ]
        .into_iter()
        .filter_map(|(column, code)| code.map(|code| (column, code)))
        .collect(),
    }
}

fn list_query(filter: &WorkoutFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(SELECT_WORKOUTS);
    for (i, (column, code)) in predicates(filter.plan()).into_iter().enumerate() {
        query.push(if i == 0 { " WHERE " } else { " AND " });
        query.push(column).push(" = ").push_bind(code);
    }
    query.push(" ORDER BY created_at DESC, id DESC");
    query
}

#[async_trait]
impl WorkoutRepository for PgWorkoutRepository {
    async fn create(&self, workout: &Workout) -> Result<Workout, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(RepositoryError::storage)?;

        let row = sqlx::query_as::<_, WorkoutRow>(
            r#"
            INSERT INTO workouts
                (exercise, status, difficulty, muscle_group, sets, reps, weight,
                 description, notes, created_at, updated_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, exercise, status, difficulty, muscle_group, sets, reps,
                      weight, description, notes, created_at, updated_at, completed_at
            "#,
        )
        .bind(workout.exercise.code())
        .bind(workout.status.code())
        .bind(workout.difficulty.code())
        .bind(workout.muscle_group.code())
        .bind(workout.sets)
        .bind(workout.reps)
        .bind(workout.weight)
        .bind(&workout.description)
        .bind(&workout.notes)
        .bind(workout.created_at)
        .bind(workout.updated_at)
        .bind(workout.completed_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::storage)?;

        tx.commit().await.map_err(RepositoryError::storage)?;

        row.try_into()
    }

    async fn get_by_id(&self, id: WorkoutId) -> Result<Workout, RepositoryError> {
        let row = sqlx::query_as::<_, WorkoutRow>(&format!("{SELECT_WORKOUTS} WHERE id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::storage)?
            .ok_or(RepositoryError::NotFound { id })?;

        row.try_into()
    }

    async fn update(
        &self,
        workout: &Workout,
        read_updated_at: DateTime<Utc>,
    ) -> Result<Workout, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(RepositoryError::storage)?;

        // A stored completion stamp wins over whatever the caller carries.
        let row = sqlx::query_as::<_, WorkoutRow>(
            r#"
            UPDATE workouts
            SET exercise = $2, status = $3, difficulty = $4, muscle_group = $5,
                sets = $6, reps = $7, weight = $8, description = $9, notes = $10,
                updated_at = $11, completed_at = COALESCE(workouts.completed_at, $12)
            WHERE id = $1 AND updated_at = $13
            RETURNING id, exercise, status, difficulty, muscle_group, sets, reps,
                      weight, description, notes, created_at, updated_at, completed_at
            "#,
        )
        .bind(workout.id.value())
        .bind(workout.exercise.code())
        .bind(workout.status.code())
        .bind(workout.difficulty.code())
        .bind(workout.muscle_group.code())
        .bind(workout.sets)
        .bind(workout.reps)
        .bind(workout.weight)
        .bind(&workout.description)
        .bind(&workout.notes)
        .bind(workout.updated_at)
        .bind(workout.completed_at)
        .bind(read_updated_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::storage)?;

        let Some(row) = row else {
            let exists =
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM workouts WHERE id = $1)")
                    .bind(workout.id.value())
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(RepositoryError::storage)?;

            return Err(if exists {
                RepositoryError::Conflict { id: workout.id }
            } else {
                RepositoryError::NotFound { id: workout.id }
            });
        };

        tx.commit().await.map_err(RepositoryError::storage)?;

        row.try_into()
    }

    async fn delete(&self, id: WorkoutId) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(RepositoryError::storage)?;

        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound { id });
        }

        tx.commit().await.map_err(RepositoryError::storage)
    }

    async fn list(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, RepositoryError> {
        let mut query = list_query(filter);
        let rows = query
            .build_query_as::<WorkoutRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        rows.into_iter().map(Workout::try_from).collect()
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workouts")
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::storage)
    }

    async fn stats(&self, period: StatsPeriod) -> Result<WorkoutStats, RepositoryError> {
        let since = period.window_start(Utc::now());
        let completed = WorkoutStatus::Completed.code();
        let skipped = WorkoutStatus::Skipped.code();

        let totals = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_workouts,
                COUNT(*) FILTER (WHERE status = $2) AS completed_workouts,
                COUNT(*) FILTER (WHERE status = $3) AS skipped_workouts,
                COALESCE(SUM(weight * sets * reps) FILTER (WHERE status = $2), 0)::DOUBLE PRECISION
                    AS total_weight_lifted
            FROM workouts
            WHERE created_at >= $1
            "#,
        )
        .bind(since)
        .bind(completed)
        .bind(skipped)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        let groups = sqlx::query_as::<_, (i32, i64)>(
            r#"
            SELECT muscle_group, COUNT(*)
            FROM workouts
            WHERE created_at >= $1
            GROUP BY muscle_group
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        let mut muscle_groups = BTreeMap::new();
        for (code, count) in groups {
            *muscle_groups
                .entry(MuscleGroup::from_code(code).unwrap_or_default())
                .or_insert(0) += count;
        }

        Ok(WorkoutStats {
            period,
            total_workouts: totals.total_workouts,
            completed_workouts: totals.completed_workouts,
            skipped_workouts: totals.skipped_workouts,
            total_weight_lifted: totals.total_weight_lifted,
            muscle_groups,
        })
    }

    async fn close(&self) -> Result<(), RepositoryError> {
        self.pool.close().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: i32, difficulty: i32, exercise: i32) -> WorkoutRow {
        let now = Utc::now();
        WorkoutRow {
            id: 9,
            exercise,
            status,
            difficulty,
            muscle_group: 42,
            sets: 3,
            reps: 10,
            weight: 20.0,
            description: String::new(),
            notes: "tempo".to_string(),
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    #[test]
    fn test_row_decodes_codes() {
        let workout = Workout::try_from(row(2, 3, 5)).unwrap();
        assert_eq!(workout.id, WorkoutId(9));
        assert_eq!(workout.status, WorkoutStatus::Completed);
        assert_eq!(workout.difficulty, Difficulty::Beast);
        assert_eq!(workout.exercise, ExerciseKind::PullUp);
        assert_eq!(workout.notes, "tempo");
    }

    #[test]
    fn test_unknown_exercise_and_muscle_group_become_unspecified() {
        let workout = Workout::try_from(row(0, 0, 99)).unwrap();
        assert_eq!(workout.exercise, ExerciseKind::Unspecified);
        assert_eq!(workout.muscle_group, MuscleGroup::Unspecified);
        assert!(!workout.is_well_formed());
    }

    #[test]
    fn test_unknown_status_is_decode_error() {
        let err = Workout::try_from(row(7, 0, 1)).unwrap_err();
        assert!(matches!(err, RepositoryError::Decode(_)));
    }

    #[test]
    fn test_list_query_without_filters() {
        let query = list_query(&WorkoutFilter::default());
        assert_eq!(
            query.sql(),
            format!("{SELECT_WORKOUTS} ORDER BY created_at DESC, id DESC")
        );
    }

    #[test]
    fn test_list_query_status_and_difficulty_skips_muscle_group() {
        let filter = WorkoutFilter::default()
            .with_status(WorkoutStatus::Completed)
            .with_difficulty(Difficulty::Advanced)
            .with_muscle_group(MuscleGroup::Legs);
        let query = list_query(&filter);
        assert_eq!(
            query.sql(),
            format!(
                "{SELECT_WORKOUTS} WHERE status = $1 AND difficulty = $2 \
                 ORDER BY created_at DESC, id DESC"
            )
        );
    }

    #[test]
    fn test_predicates_follow_plan() {
        let status_and_group = WorkoutFilter::default()
            .with_status(WorkoutStatus::Planned)
            .with_muscle_group(MuscleGroup::Back);
        assert_eq!(
            predicates(status_and_group.plan()),
            vec![("status", 0), ("muscle_group", 2)]
        );

        let difficulty_and_group = WorkoutFilter::default()
            .with_difficulty(Difficulty::Intermediate)
            .with_muscle_group(MuscleGroup::Chest);
        assert_eq!(
            predicates(difficulty_and_group.plan()),
            vec![("difficulty", 1), ("muscle_group", 1)]
        );

        let muscle_only = WorkoutFilter::default().with_muscle_group(MuscleGroup::FullBody);
        assert_eq!(predicates(muscle_only.plan()), vec![("muscle_group", 10)]);
    }

    #[test]
    fn test_migration_constrains_decoded_codes() {
        let migration = include_str!("../../../migrations/20260101000000_create_workouts.sql");
        assert!(migration.contains("CHECK (status BETWEEN 0 AND 3)"));
        assert!(migration.contains("CHECK (difficulty BETWEEN 0 AND 3)"));
        for code in 0..=3 {
            assert!(WorkoutStatus::from_code(code).is_some());
            assert!(Difficulty::from_code(code).is_some());
        }
        assert!(WorkoutStatus::from_code(4).is_none());
        assert!(Difficulty::from_code(4).is_none());
    }
}
