//! Goods resource routes, mounted under the /goods prefix.

use crate::handlers::goods::{create_goods, delete_goods, list_goods, read_goods, update_goods};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;

pub fn goods_routes(state: AppState) -> Router {
    // Full paths merged at the app root. `axum`'s `nest("/goods", ..)` would
    // only match the collection at `/goods` (no trailing slash), leaving the
    // documented `/goods/` endpoint unreachable; registering both keeps the
    // bare prefix working and serves the `/goods/` the spec declares.
    Router::new()
        .route("/goods", get(list_goods).post(create_goods))
        .route("/goods/", get(list_goods).post(create_goods))
        .route(
            "/goods/:id",
            get(read_goods).put(update_goods).delete(delete_goods),
        )
        .with_state(state)
}
