//! 商品目录服务入口

use std::sync::Arc;

use product_service::{DEFAULT_PORT, ProductServiceState, SERVICE_NAME};
use shop_shared::{config::AppConfig, observability, server};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(SERVICE_NAME, DEFAULT_PORT)?;
    let telemetry = observability::init(&config)?;

    let state = Arc::new(ProductServiceState::new());
    info!(products = state.catalog.len(), "商品目录已加载");

    let mut app = product_service::app(state);
    if let Some(handle) = telemetry.metrics_handle() {
        app = app.merge(observability::metrics::metrics_routes(handle.clone()));
    }

    server::serve(&config, app).await
}
