//! Route assembly per resource.

pub mod common;
pub mod goods;

pub use common::common_routes;
pub use goods::goods_routes;
