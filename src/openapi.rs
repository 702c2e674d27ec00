//! OpenAPI document served at /api-docs/openapi.json and rendered by the
//! Swagger UI at /docs.

use crate::handlers::goods;
use crate::model::{Goods, GoodsCreate, GoodsUpdate};
use crate::routes::common;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Goods API", description = "Goods tool backend API."),
    paths(
        goods::create_goods,
        goods::list_goods,
        goods::read_goods,
        goods::update_goods,
        goods::delete_goods,
        common::ping,
        common::test,
        common::health
    ),
    components(schemas(Goods, GoodsCreate, GoodsUpdate))
)]
pub struct ApiDoc;
