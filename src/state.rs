//! Shared application state for all routes.

use crate::logging::EventLog;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub log: Arc<dyn EventLog>,
}
