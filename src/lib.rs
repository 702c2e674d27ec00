//! Goods API: CRUD backend for the goods inventory resource.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;

pub use app::build_app;
pub use config::Settings;
pub use error::{AppError, ConfigError, FieldError};
pub use extract::ValidJson;
pub use logging::{ConsoleLog, EventLog};
pub use model::{Goods, GoodsCreate, GoodsUpdate, ListParams};
pub use state::AppState;
pub use store::{ensure_database_exists, Session, Store};
