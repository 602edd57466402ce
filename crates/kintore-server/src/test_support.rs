//! Shared fixtures for router tests

use std::sync::Arc;

use axum::{body::Body, http::Response};
use serde::de::DeserializeOwned;

use kintore::{InMemoryWorkoutRepository, NoopEventSink, WorkoutRepository};

use crate::application::WorkoutService;
use crate::AppState;

pub fn test_state() -> AppState {
    let repo: Arc<dyn WorkoutRepository> = Arc::new(InMemoryWorkoutRepository::new());
    AppState {
        workout_service: Arc::new(WorkoutService::new(repo, Arc::new(NoopEventSink))),
    }
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
