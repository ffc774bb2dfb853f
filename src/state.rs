use std::sync::Arc;

use crate::{
    config::AppConfig,
    storage::{SessionStore, Storage},
    upload::UploadDir,
};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub sessions: Arc<dyn SessionStore>,
    pub uploads: UploadDir,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, config: AppConfig) -> Self {
        Self {
            sessions: storage.session_store(),
            uploads: UploadDir::new(config.upload_dir.clone()),
            config: Arc::new(config),
            storage,
        }
    }
}
