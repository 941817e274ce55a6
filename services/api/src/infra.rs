use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use realty::catalog::CatalogService;
use realty::config::StoreConfig;
use realty::error::AppError;
use realty::store::{DocumentStore, MemoryStore, MongoStore};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: CatalogService,
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Open the configured store backend.
///
/// Without a `DATABASE_URL` the service falls back to a volatile in-memory
/// store so local development works without a running deployment.
pub(crate) async fn open_store(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, AppError> {
    match config.uri.as_deref() {
        Some(uri) => {
            let store = MongoStore::connect(uri, &config.database).await?;
            Ok(Arc::new(store))
        }
        None => {
            warn!("DATABASE_URL is not set; catalog data will not survive a restart");
            Ok(Arc::new(MemoryStore::default()))
        }
    }
}
