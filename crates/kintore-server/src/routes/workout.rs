//! Workout Routes - Training Log Management
//!
//! HTTP handlers that delegate to WorkoutService for business logic.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::error_response;
use crate::models::{
    CreateWorkoutPayload, UpdateWorkoutPayload, WorkoutCountResponse, WorkoutListQuery,
    WorkoutResponse,
};
use crate::AppState;
use kintore::WorkoutId;

/// List workouts
#[utoipa::path(
    get,
    path = "/kintore/workouts",
    params(WorkoutListQuery),
    responses(
        (status = 200, description = "Workouts, newest first", body = Vec<WorkoutResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workout"
)]
pub async fn list_workouts(
    State(state): State<AppState>,
    Query(query): Query<WorkoutListQuery>,
) -> Result<Json<Vec<WorkoutResponse>>, (axum::http::StatusCode, String)> {
    let workouts = state
        .workout_service
        .list(query.into())
        .await
        .map_err(error_response)?;

    Ok(Json(workouts.into_iter().map(Into::into).collect()))
}

/// Create new workout
#[utoipa::path(
    post,
    path = "/kintore/workouts",
    request_body = CreateWorkoutPayload,
    responses(
        (status = 200, description = "Workout created successfully", body = WorkoutResponse),
        (status = 400, description = "Invalid or negative fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workout"
)]
pub async fn create_workout(
    State(state): State<AppState>,
    Json(payload): Json<CreateWorkoutPayload>,
) -> Result<Json<WorkoutResponse>, (axum::http::StatusCode, String)> {
    let workout = state
        .workout_service
        .create(payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(workout.into()))
}

/// Get workout by ID
#[utoipa::path(
    get,
    path = "/kintore/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Workout not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workout"
)]
pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<WorkoutResponse>, (axum::http::StatusCode, String)> {
    let workout = state
        .workout_service
        .get(WorkoutId(id))
        .await
        .map_err(error_response)?;

    Ok(Json(workout.into()))
}

/// Update workout
#[utoipa::path(
    put,
    path = "/kintore/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout ID")
    ),
    request_body = UpdateWorkoutPayload,
    responses(
        (status = 200, description = "Workout updated successfully", body = WorkoutResponse),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Workout not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workout"
)]
pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateWorkoutPayload>,
) -> Result<Json<WorkoutResponse>, (axum::http::StatusCode, String)> {
    let workout = state
        .workout_service
        .update(payload.into_request(id))
        .await
        .map_err(error_response)?;

    Ok(Json(workout.into()))
}

/// Delete workout
#[utoipa::path(
    delete,
    path = "/kintore/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Workout not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workout"
)]
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, (axum::http::StatusCode, String)> {
    state
        .workout_service
        .delete(WorkoutId(id))
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Workout deleted"
    })))
}

/// List high intensity workouts (Advanced or Beast, 50kg and up)
#[utoipa::path(
    get,
    path = "/kintore/workouts/high-intensity",
    responses(
        (status = 200, description = "High intensity workouts", body = Vec<WorkoutResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workout"
)]
pub async fn list_high_intensity(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutResponse>>, (axum::http::StatusCode, String)> {
    let workouts = state
        .workout_service
        .high_intensity()
        .await
        .map_err(error_response)?;

    Ok(Json(workouts.into_iter().map(Into::into).collect()))
}

/// Count all workouts
#[utoipa::path(
    get,
    path = "/kintore/workouts/count",
    responses(
        (status = 200, description = "Total number of workouts", body = WorkoutCountResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workout"
)]
pub async fn count_workouts(
    State(state): State<AppState>,
) -> Result<Json<WorkoutCountResponse>, (axum::http::StatusCode, String)> {
    let count = state
        .workout_service
        .count()
        .await
        .map_err(error_response)?;

    Ok(Json(WorkoutCountResponse { count }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kintore/workouts", get(list_workouts).post(create_workout))
        .route("/kintore/workouts/high-intensity", get(list_high_intensity))
        .route("/kintore/workouts/count", get(count_workouts))
        .route(
            "/kintore/workouts/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{read_json, test_state};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        router().with_state(test_state())
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/kintore/workouts",
                serde_json::json!({
                    "exercise": "bench_press",
                    "muscle_group": "chest",
                    "weight": 60.0
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created: WorkoutResponse = read_json(response).await;
        assert_eq!(created.sets, 3);
        assert_eq!(created.reps, 10);

        let response = app
            .oneshot(get_request(&format!("/kintore/workouts/{}", created.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: WorkoutResponse = read_json(response).await;
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.weight, 60.0);
    }

    #[tokio::test]
    async fn test_create_with_negative_fields_is_bad_request() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/kintore/workouts",
                serde_json::json!({ "exercise": "squat", "sets": -1, "weight": -5.0 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let response = app()
            .oneshot(get_request("/kintore/workouts/404"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_zero_id_is_bad_request() {
        let response = app()
            .oneshot(get_request("/kintore/workouts/0"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_completes_and_delete_removes() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/kintore/workouts",
                serde_json::json!({ "exercise": "deadlift" }),
            ))
            .await
            .unwrap();
        let created: WorkoutResponse = read_json(response).await;
        let uri = format!("/kintore/workouts/{}", created.id);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &uri,
                serde_json::json!({ "exercise": "deadlift", "status": "completed" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated: WorkoutResponse = read_json(response).await;
        assert!(updated.completed_at.is_some());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_filters_and_count() {
        let app = app();
        for body in [
            serde_json::json!({ "exercise": "squat", "difficulty": "advanced", "weight": 80.0 }),
            serde_json::json!({ "exercise": "pull_up" }),
        ] {
            app.clone()
                .oneshot(json_request("POST", "/kintore/workouts", body))
                .await
                .unwrap();
        }

        let response = app
            .clone()
            .oneshot(get_request(
                "/kintore/workouts?status=planned&difficulty=advanced",
            ))
            .await
            .unwrap();
        let listed: Vec<WorkoutResponse> = read_json(response).await;
        assert_eq!(listed.len(), 1);

        let response = app
            .clone()
            .oneshot(get_request("/kintore/workouts/high-intensity"))
            .await
            .unwrap();
        let heavy: Vec<WorkoutResponse> = read_json(response).await;
        assert_eq!(heavy.len(), 1);

        let response = app
            .oneshot(get_request("/kintore/workouts/count"))
            .await
            .unwrap();
        let count: WorkoutCountResponse = read_json(response).await;
        assert_eq!(count.count, 2);
    }
}
