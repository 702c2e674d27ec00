//! Typed errors and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Startup configuration failures. Never mapped to an HTTP response; the
/// process refuses to start instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// One entry of the 422 `detail` array.
#[derive(Clone, Debug, Serialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Every error response body is `{"detail": ...}` with a string or a
/// structured list inside.
#[derive(Serialize)]
struct Detail<T: Serialize> {
    detail: T,
}

impl AppError {
    /// The fixed 404 returned by every goods lookup.
    pub fn goods_not_found() -> Self {
        AppError::NotFound("Goods not found".into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(Detail { detail: msg })).into_response()
            }
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(Detail { detail: errors }),
            )
                .into_response(),
            // Storage failures are not recovered in handlers; they surface
            // here as a generic server fault.
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Detail {
                        detail: "internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn status_and_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_fixed_detail() {
        let (status, body) = status_and_json(AppError::goods_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "detail": "Goods not found" }));
    }

    #[tokio::test]
    async fn validation_maps_to_422_with_detail_array() {
        let err = AppError::Validation(vec![FieldError {
            msg: "missing field `name`".into(),
            kind: "validation_error",
        }]);
        let (status, body) = status_and_json(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let detail = body["detail"].as_array().unwrap();
        assert_eq!(detail.len(), 1);
        assert_eq!(detail[0]["msg"], "missing field `name`");
        assert_eq!(detail[0]["type"], "validation_error");
    }

    #[tokio::test]
    async fn database_errors_map_to_500_without_leaking() {
        let (status, body) = status_and_json(AppError::Db(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "detail": "internal server error" }));
    }
}
