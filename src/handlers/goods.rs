//! Goods CRUD handlers: create, list, read, update, delete.
//!
//! Each handler acquires one session from the store, runs one query or
//! mutation, commits if mutating, and maps a missing row to the fixed 404.

use crate::error::AppError;
use crate::extract::ValidJson;
use crate::model::{Goods, GoodsCreate, GoodsUpdate, ListParams};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/goods/",
    request_body = GoodsCreate,
    responses(
        (status = 201, description = "Goods created", body = Goods),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn create_goods(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<GoodsCreate>,
) -> Result<(StatusCode, Json<Goods>), AppError> {
    let mut session = state.store.session().await?;
    let goods = session.insert(&payload).await?;
    session.commit().await?;
    state
        .log
        .success(&format!("created goods with id {}", goods.id));
    Ok((StatusCode::CREATED, Json(goods)))
}

#[utoipa::path(
    get,
    path = "/goods/",
    params(ListParams),
    responses((status = 200, description = "One page of goods in id order", body = [Goods]))
)]
pub async fn list_goods(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Goods>>, AppError> {
    let mut session = state.store.session().await?;
    let page = session.page(params.skip, params.limit).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/goods/{id}",
    params(("id" = i32, Path, description = "Goods id")),
    responses(
        (status = 200, description = "The goods row", body = Goods),
        (status = 404, description = "No goods with that id")
    )
)]
pub async fn read_goods(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Goods>, AppError> {
    let mut session = state.store.session().await?;
    let Some(goods) = session.by_id(id).await? else {
        state.log.error(&format!("goods with id {id} not found"));
        return Err(AppError::goods_not_found());
    };
    state.log.success(&format!("fetched goods with id {id}"));
    Ok(Json(goods))
}

#[utoipa::path(
    put,
    path = "/goods/{id}",
    params(("id" = i32, Path, description = "Goods id")),
    request_body = GoodsUpdate,
    responses(
        (status = 200, description = "Goods after the merge", body = Goods),
        (status = 404, description = "No goods with that id"),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn update_goods(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidJson(patch): ValidJson<GoodsUpdate>,
) -> Result<Json<Goods>, AppError> {
    state
        .log
        .info(&format!("update requested for goods with id {id}"));
    let mut session = state.store.session().await?;
    let Some(mut goods) = session.by_id(id).await? else {
        state.log.error(&format!("goods with id {id} not found"));
        return Err(AppError::goods_not_found());
    };
    for (field, value) in patch.apply(&mut goods) {
        state.log.info(&format!("updated field `{field}` -> {value}"));
    }
    let goods = session.update(&goods).await?;
    session.commit().await?;
    state.log.success(&format!("updated goods with id {id}"));
    Ok(Json(goods))
}

#[utoipa::path(
    delete,
    path = "/goods/{id}",
    params(("id" = i32, Path, description = "Goods id")),
    responses(
        (status = 204, description = "Goods deleted"),
        (status = 404, description = "No goods with that id")
    )
)]
pub async fn delete_goods(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let mut session = state.store.session().await?;
    if !session.delete(id).await? {
        state
            .log
            .error(&format!("failed to delete goods with id {id}"));
        return Err(AppError::goods_not_found());
    }
    session.commit().await?;
    state.log.success(&format!("deleted goods with id {id}"));
    Ok(StatusCode::NO_CONTENT)
}
