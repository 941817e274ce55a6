use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum_prometheus::PrometheusMetricLayer;
use realty::catalog::{seed_properties, CatalogService};
use realty::config::AppConfig;
use realty::error::AppError;
use realty::telemetry;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{open_store, AppState};
use crate::routes::router;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let store = open_store(&config.store).await?;
    let catalog = CatalogService::new(store);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        catalog,
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "property catalog service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) async fn run_seed() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let store = open_store(&config.store).await?;
    let catalog = CatalogService::new(store);

    let inserted = seed_properties(&catalog).await?;
    if inserted == 0 {
        info!("listings collection already populated; nothing inserted");
    } else {
        info!(inserted, "sample listings inserted");
    }
    Ok(())
}
