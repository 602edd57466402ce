use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use kintore::WorkoutRepository;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{PgWorkoutRepository, TracingEventSink};
use application::WorkoutService;
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub workout_service: Arc<WorkoutService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Kintore API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Routes under /kintore plus health check and API docs
fn app(state: AppState) -> Router {
    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::workout::router())
        .merge(routes::stats::router())
        .layer(middleware::from_fn(auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Kintore API initializing...");

    let config = AppConfig::from_secrets(&secrets).map_err(anyhow::Error::from)?;

    match config.api_key {
        Some(api_key) => {
            auth::init_api_key(api_key);
            tracing::info!("API key authentication enabled");
        }
        None => tracing::warn!("No {} set - authentication disabled", config::API_KEY_SECRET),
    }

    if config.run_migrations {
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| anyhow::anyhow!("failed to run database migrations: {e}"))?;
        tracing::info!("Database migrations completed");
    } else {
        tracing::warn!("Skipping database migrations");
    }

    let workout_repo: Arc<dyn WorkoutRepository> = Arc::new(PgWorkoutRepository::new(pool));
    let workout_service = Arc::new(WorkoutService::new(
        workout_repo,
        Arc::new(TracingEventSink),
    ));

    let router = app(AppState { workout_service });

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Kintore API ready");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check_is_public() {
        let response = app(test_support::test_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test_support::read_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_workout_routes_are_mounted() {
        let response = app(test_support::test_state())
            .oneshot(
                Request::builder()
                    .uri("/kintore/workouts/count")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
