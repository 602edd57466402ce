//! Workout Application Service (Use Case)
//!
//! Business rules for workout records: defaults, validation, partial
//! updates, completion stamping and post-retrieval integrity checks.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use kintore::{
    Difficulty, DomainError, ExerciseKind, MuscleGroup, StatsPeriod, ValidationErrors, Workout,
    WorkoutError, WorkoutEvent, WorkoutEventSink, WorkoutFilter, WorkoutId, WorkoutRepository,
    WorkoutStats, WorkoutStatus,
};

/// Minimum weight (kg) for a workout to count as high intensity
pub const HIGH_INTENSITY_MIN_WEIGHT: f64 = 50.0;

/// Reads retried when another writer changed the record first
const MAX_UPDATE_ATTEMPTS: usize = 3;

/// Create request. `None` fields keep the server default.
#[derive(Debug, Clone, Default)]
pub struct CreateWorkoutRequest {
    pub exercise: ExerciseKind,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub muscle_group: Option<MuscleGroup>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

impl CreateWorkoutRequest {
    pub fn new(exercise: ExerciseKind) -> Self {
        Self {
            exercise,
            ..Self::default()
        }
    }

    /// Defaults overlaid with every supplied field
    fn into_workout(self) -> Workout {
        let mut workout = Workout::new(self.exercise);
        if let Some(description) = self.description {
            workout.description = description;
        }
        if let Some(difficulty) = self.difficulty {
            workout.difficulty = difficulty;
        }
        if let Some(muscle_group) = self.muscle_group {
            workout.muscle_group = muscle_group;
        }
        if let Some(sets) = self.sets {
            workout.sets = sets;
        }
        if let Some(reps) = self.reps {
            workout.reps = reps;
        }
        if let Some(weight) = self.weight {
            workout.weight = weight;
        }
        if let Some(notes) = self.notes {
            workout.notes = notes;
        }
        workout
    }
}

/// Partial update request. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkoutRequest {
    pub id: WorkoutId,
    pub exercise: ExerciseKind,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub muscle_group: Option<MuscleGroup>,
    pub status: Option<WorkoutStatus>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

impl UpdateWorkoutRequest {
    pub fn new(id: WorkoutId, exercise: ExerciseKind) -> Self {
        Self {
            id,
            exercise,
            ..Self::default()
        }
    }

    /// Collects every violation. A bad id or exercise makes the whole
    /// request an invalid argument; otherwise violations are validation errors.
    fn validate(&self) -> Result<(), DomainError> {
        let mut errors = ValidationErrors::new();
        errors.check(self.id.is_valid(), "id", || {
            format!("invalid workout ID: {}", self.id)
        });
        errors.check(self.exercise.is_specified(), "exercise", || {
            "exercise must be specified".to_string()
        });
        let malformed = !errors.is_empty();
        check_measurements(&mut errors, self.sets, self.reps, self.weight);

        match errors.into_result() {
            Ok(()) => Ok(()),
            Err(errors) if malformed => Err(DomainError::InvalidArgument(errors.to_string())),
            Err(errors) => Err(DomainError::Validation(errors)),
        }
    }
}

impl UpdateWorkoutRequest {
    /// Apply exercise and every present field. Returns the status events
    /// to emit once the change is stored.
    fn apply_to(&self, workout: &mut Workout, now: DateTime<Utc>) -> Vec<WorkoutEvent> {
        let (id, exercise) = (self.id, self.exercise);
        let mut pending = Vec::new();

        workout.exercise = exercise;
        if let Some(description) = &self.description {
            workout.description = description.clone();
        }
        if let Some(status) = self.status {
            let previous = workout.status;
            let stamped = workout.transition_to(status, now);
            pending.push(WorkoutEvent::StatusChanged {
                id,
                exercise,
                from: previous,
                to: status,
            });
            if stamped {
                pending.push(WorkoutEvent::Completed { id, exercise });
            }
            if status == WorkoutStatus::Skipped {
                pending.push(WorkoutEvent::Skipped { id, exercise });
            }
        }
        if let Some(difficulty) = self.difficulty {
            workout.difficulty = difficulty;
        }
        if let Some(muscle_group) = self.muscle_group {
            workout.muscle_group = muscle_group;
        }
        if let Some(sets) = self.sets {
            workout.sets = sets;
        }
        if let Some(reps) = self.reps {
            workout.reps = reps;
        }
        if let Some(weight) = self.weight {
            workout.weight = weight;
        }
        if let Some(notes) = &self.notes {
            workout.notes = notes.clone();
        }
        workout.updated_at = now;
        pending
    }
}

fn check_measurements(
    errors: &mut ValidationErrors,
    sets: Option<i32>,
    reps: Option<i32>,
    weight: Option<f64>,
) {
    if let Some(sets) = sets {
        errors.check(sets >= 0, "sets", || format!("sets cannot be negative: {}", sets));
    }
    if let Some(reps) = reps {
        errors.check(reps >= 0, "reps", || format!("reps cannot be negative: {}", reps));
    }
    if let Some(weight) = weight {
        if weight.is_finite() {
            errors.check(weight >= 0.0, "weight", || {
                format!("weight cannot be negative: {:.2}", weight)
            });
        } else {
            errors.push("weight", format!("weight must be a finite number: {}", weight));
        }
    }
}

fn validate_workout(workout: &Workout) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_measurements(
        &mut errors,
        Some(workout.sets),
        Some(workout.reps),
        Some(workout.weight),
    );
    errors.into_result()
}

fn ensure_valid_id(id: WorkoutId) -> Result<(), DomainError> {
    if id.is_valid() {
        Ok(())
    } else {
        Err(DomainError::InvalidArgument(format!(
            "workout ID must be positive (got: {})",
            id
        )))
    }
}

/// Application service for Workout operations
pub struct WorkoutService<R: WorkoutRepository + ?Sized = dyn WorkoutRepository> {
    repo: Arc<R>,
    events: Arc<dyn WorkoutEventSink>,
}

impl<R: WorkoutRepository + ?Sized> WorkoutService<R> {
    pub fn new(repo: Arc<R>, events: Arc<dyn WorkoutEventSink>) -> Self {
        Self { repo, events }
    }

    fn report(&self, err: WorkoutError) -> WorkoutError {
        self.events.emit(WorkoutEvent::OperationFailed {
            op: err.op,
            message: err.to_string(),
        });
        err
    }

    /// Create a new workout
    pub async fn create(&self, request: CreateWorkoutRequest) -> Result<Workout, WorkoutError> {
        const OP: &str = "create";
        let exercise = request.exercise;
        let fail = |source: DomainError| {
            self.report(WorkoutError::new(OP, source).with_exercise(exercise))
        };

        if !exercise.is_specified() {
            return Err(fail(DomainError::InvalidArgument(
                "exercise must be specified".to_string(),
            )));
        }

        let workout = request.into_workout();
        validate_workout(&workout).map_err(|e| fail(e.into()))?;

        let saved = self
            .repo
            .create(&workout)
            .await
            .map_err(|e| fail(e.into()))?;

        self.events.emit(WorkoutEvent::Created {
            id: saved.id,
            exercise: saved.exercise,
            difficulty: saved.difficulty,
            sets: saved.sets,
            reps: saved.reps,
            weight: saved.weight,
        });

        Ok(saved)
    }

    /// Get a workout by ID
    pub async fn get(&self, id: WorkoutId) -> Result<Workout, WorkoutError> {
        const OP: &str = "get";
        let fail = |source: DomainError| self.report(WorkoutError::new(OP, source).with_id(id));

        ensure_valid_id(id).map_err(fail)?;

        let workout = self.repo.get_by_id(id).await.map_err(|e| fail(e.into()))?;

        if !workout.is_well_formed() {
            return Err(self.report(
                WorkoutError::new(
                    OP,
                    DomainError::Integrity(format!(
                        "workout failed validation after retrieval (id: {}, stored id: {})",
                        id, workout.id
                    )),
                )
                .with_id(id)
                .with_exercise(workout.exercise),
            ));
        }

        Ok(workout)
    }

    /// Apply the fields present in the request to an existing workout.
    ///
    /// The read and the write are tied together by the repository's
    /// `updated_at` check; a concurrent change forces a fresh read.
    pub async fn update(&self, request: UpdateWorkoutRequest) -> Result<Workout, WorkoutError> {
        const OP: &str = "update";
        let (id, exercise) = (request.id, request.exercise);
        let fail = |source: DomainError| {
            self.report(
                WorkoutError::new(OP, source)
                    .with_id(id)
                    .with_exercise(exercise),
            )
        };

        request.validate().map_err(fail)?;

        let mut attempt = 1;
        loop {
            let mut workout = self.repo.get_by_id(id).await.map_err(|e| fail(e.into()))?;
            let read_updated_at = workout.updated_at;
            // updated_at must move forward for the next writer's check to see this one
            let now = Utc::now().max(read_updated_at + Duration::microseconds(1));
            let pending = request.apply_to(&mut workout, now);

            match self.repo.update(&workout, read_updated_at).await {
                Ok(saved) => {
                    for event in pending {
                        self.events.emit(event);
                    }
                    self.events.emit(WorkoutEvent::Updated { id, exercise });
                    return Ok(saved);
                }
                Err(e) if e.is_conflict() && attempt < MAX_UPDATE_ATTEMPTS => attempt += 1,
                Err(e) => return Err(fail(e.into())),
            }
        }
    }

    /// Delete a workout
    pub async fn delete(&self, id: WorkoutId) -> Result<(), WorkoutError> {
        const OP: &str = "delete";
        let fail = |source: DomainError| self.report(WorkoutError::new(OP, source).with_id(id));

        ensure_valid_id(id).map_err(fail)?;

        let workout = self.repo.get_by_id(id).await.map_err(|e| fail(e.into()))?;
        if workout.is_completed() {
            self.events.emit(WorkoutEvent::DeletingCompleted {
                id,
                exercise: workout.exercise,
            });
        }

        self.repo.delete(id).await.map_err(|e| {
            self.report(
                WorkoutError::new(OP, e)
                    .with_id(id)
                    .with_exercise(workout.exercise),
            )
        })?;

        self.events.emit(WorkoutEvent::Deleted {
            id,
            exercise: workout.exercise,
        });

        Ok(())
    }

    /// List workouts, dropping any stored record that breaks the base invariants
    pub async fn list(&self, filter: WorkoutFilter) -> Result<Vec<Workout>, WorkoutError> {
        const OP: &str = "list";

        let mut workouts = self
            .repo
            .list(&filter)
            .await
            .map_err(|e| self.report(WorkoutError::new(OP, e)))?;

        let fetched = workouts.len();
        workouts.retain(Workout::is_well_formed);

        self.events.emit(WorkoutEvent::Listed {
            fetched,
            retained: workouts.len(),
        });

        Ok(workouts)
    }

    /// Advanced or Beast workouts lifting at least [`HIGH_INTENSITY_MIN_WEIGHT`]
    pub async fn high_intensity(&self) -> Result<Vec<Workout>, WorkoutError> {
        const OP: &str = "high_intensity";

        let all = self
            .repo
            .list(&WorkoutFilter::default())
            .await
            .map_err(|e| self.report(WorkoutError::new(OP, e)))?;

        let total = all.len();
        let matched: Vec<Workout> = all
            .into_iter()
            .filter(|w| w.difficulty.is_high() && w.weight >= HIGH_INTENSITY_MIN_WEIGHT)
            .collect();

        self.events.emit(WorkoutEvent::HighIntensityScanned {
            total,
            matched: matched.len(),
        });

        Ok(matched)
    }

    /// Count all workouts
    pub async fn count(&self) -> Result<i64, WorkoutError> {
        self.repo
            .count()
            .await
            .map_err(|e| self.report(WorkoutError::new("count", e)))
    }

    /// Aggregate statistics for "today", "week", "month"; anything else means the last 30 days
    pub async fn stats(&self, period: &str) -> Result<WorkoutStats, WorkoutError> {
        self.repo
            .stats(StatsPeriod::parse_lenient(period))
            .await
            .map_err(|e| self.report(WorkoutError::new("stats", e)))
    }

    /// Release repository resources
    pub async fn shutdown(&self) -> Result<(), WorkoutError> {
        self.repo
            .close()
            .await
            .map_err(|e| self.report(WorkoutError::new("shutdown", e)))
    }
}
