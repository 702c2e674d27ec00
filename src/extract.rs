//! JSON body extraction with the global 422 rejection shape.

use crate::error::{AppError, FieldError};
use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// `Json<T>` wrapper whose rejection is the structured 422 body instead of
/// axum's plain-text default.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(AppError::Validation(vec![field_error(rejection)])),
        }
    }
}

fn field_error(rejection: JsonRejection) -> FieldError {
    let kind = match &rejection {
        JsonRejection::JsonDataError(_) => "validation_error",
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "missing_content_type",
        _ => "bad_request",
    };
    FieldError {
        msg: rejection.body_text(),
        kind,
    }
}
