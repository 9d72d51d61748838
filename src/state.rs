use crate::models::AppData;
use crate::storage::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state. `store` is `None` when the backing store could
/// not be opened; the dashboard then runs in-memory only. All commits go
/// through the single `data` mutex, so concurrent edits serialize and the
/// last commit wins.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<Store>,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(store: Option<Store>, data: AppData) -> Self {
        Self {
            store,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
