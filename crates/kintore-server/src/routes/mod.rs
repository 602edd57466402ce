//! Kintore API Routes
//!
//! - /kintore/workouts - Workout records
//! - /kintore/workouts/high-intensity - Heavy advanced sessions
//! - /kintore/workouts/count - Record count
//! - /kintore/stats - Windowed aggregates

use axum::http::StatusCode;
use kintore::{DomainError, RepositoryError, WorkoutError};

pub mod stats;
pub mod swagger;
pub mod workout;

/// Map a use-case failure onto an HTTP status and message
pub(crate) fn error_response(err: WorkoutError) -> (StatusCode, String) {
    let status = match err.kind() {
        DomainError::InvalidArgument(_) | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Repository(RepositoryError::Conflict { .. }) => StatusCode::CONFLICT,
        DomainError::Repository(_) | DomainError::Integrity(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kintore::{ValidationErrors, WorkoutId};

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (
                WorkoutError::new("get", DomainError::InvalidArgument("bad id".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                WorkoutError::new("create", ValidationErrors::new()),
                StatusCode::BAD_REQUEST,
            ),
            (
                WorkoutError::new("get", RepositoryError::NotFound { id: WorkoutId(3) }),
                StatusCode::NOT_FOUND,
            ),
            (
                WorkoutError::new("update", RepositoryError::Conflict { id: WorkoutId(3) }),
                StatusCode::CONFLICT,
            ),
            (
                WorkoutError::new("get", DomainError::Integrity("corrupt".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                WorkoutError::new("count", RepositoryError::Decode("bad code".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(error_response(err).0, expected);
        }
    }

    #[test]
    fn test_error_message_carries_context() {
        let err = WorkoutError::new("delete", RepositoryError::NotFound { id: WorkoutId(8) })
            .with_id(WorkoutId(8));
        let (_, message) = error_response(err);
        assert!(message.contains("op=delete"));
        assert!(message.contains("id=8"));
    }
}
