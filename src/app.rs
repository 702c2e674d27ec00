//! Router assembly: auxiliary routes, goods resource, docs, body limit.

use crate::openapi::ApiDoc;
use crate::routes::{common_routes, goods_routes};
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Request bodies larger than this are rejected before deserialization.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(goods_routes(state))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
}
