/// Shared application state
use crate::services::MediaStorage;
use ringside_storage::Database;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub media_storage: Arc<MediaStorage>,
}

impl AppState {
    pub fn new(db: Arc<Database>, media_storage: Arc<MediaStorage>) -> Self {
        Self { db, media_storage }
    }
}
