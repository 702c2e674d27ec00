//! Auxiliary routes: docs redirect, liveness probes, database health.

use crate::state::AppState;
use axum::response::Redirect;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

async fn redirect_to_docs() -> Redirect {
    Redirect::temporary("/docs")
}

#[utoipa::path(
    get,
    path = "/ping",
    responses((status = 200, description = "Liveness probe"))
)]
pub async fn ping() -> Json<Value> {
    Json(json!({ "ping": "pong!" }))
}

#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Liveness probe"))
)]
pub async fn test() -> Json<Value> {
    Json(json!({ "hello": "world!" }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if sqlx::query("SELECT 1")
        .fetch_optional(state.store.pool())
        .await
        .is_err()
    {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "degraded", "database": "unavailable" })),
        ));
    }
    Ok(Json(json!({ "status": "ok" })))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_to_docs))
        .route("/ping", get(ping))
        .route("/test", get(test))
        .route("/health", get(health))
        .with_state(state)
}
