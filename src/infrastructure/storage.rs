use crate::config::ServerConfig;
use crate::services::storage::LocalStorageService;
use std::sync::Arc;
use tracing::info;

/// Builds the local artifact store from config.
///
/// The upload directory itself is created lazily on the first store, so
/// a missing or unwritable path surfaces as a request error rather than
/// a startup failure.
pub fn setup_storage(config: &ServerConfig) -> Arc<LocalStorageService> {
    info!("🗂️  Local storage: {}", config.upload_dir.display());
    Arc::new(LocalStorageService::new(config.upload_dir.clone()))
}
