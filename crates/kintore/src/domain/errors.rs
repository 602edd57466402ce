//! Domain Errors
//!
//! Error types for domain operations.
//!
//! - [`RepositoryError`]: raised by repository implementations
//! - [`DomainError`]: the taxonomy callers branch on
//! - [`WorkoutError`]: a [`DomainError`] wrapped with operation context

use thiserror::Error;

use crate::domain::value_objects::{ExerciseKind, WorkoutId};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Repository layer errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("workout {id} not found")]
    NotFound { id: WorkoutId },

    /// The stored record changed after it was read
    #[error("workout {id} was modified concurrently")]
    Conflict { id: WorkoutId },

    #[error("storage fault: {0}")]
    Storage(#[source] BoxError),

    #[error("cannot decode stored workout: {0}")]
    Decode(String),
}

impl RepositoryError {
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// A single business-rule violation on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Every violation found in one validation pass, in field declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    /// Record a violation when `ok` is false
    pub fn check(&mut self, ok: bool, field: &'static str, message: impl FnOnce() -> String) {
        if !ok {
            self.push(field, message());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Workout not found: {id}")]
    NotFound { id: WorkoutId },

    #[error("Repository error: {0}")]
    Repository(#[source] RepositoryError),

    #[error("Integrity error: {0}")]
    Integrity(String),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id } => Self::NotFound { id },
            other => Self::Repository(other),
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Use-case failure with the operation and record it concerned
#[derive(Debug, Error)]
pub struct WorkoutError {
    pub op: &'static str,
    pub id: Option<WorkoutId>,
    pub exercise: Option<ExerciseKind>,
    #[source]
    pub source: DomainError,
}

impl WorkoutError {
    pub fn new(op: &'static str, source: impl Into<DomainError>) -> Self {
        Self {
            op,
            id: None,
            exercise: None,
            source: source.into(),
        }
    }

    pub fn with_id(mut self, id: WorkoutId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_exercise(mut self, exercise: ExerciseKind) -> Self {
        self.exercise = Some(exercise);
        self
    }

    pub fn kind(&self) -> &DomainError {
        &self.source
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.source, DomainError::NotFound { .. })
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match &self.source {
            DomainError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorkoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "workout error: op={}", self.op)?;
        if let Some(id) = self.id {
            write!(f, ", id={}", id)?;
        }
        if let Some(exercise) = self.exercise {
            write!(f, ", exercise={}", exercise)?;
        }
        write!(f, ": {}", self.source)
    }
}
