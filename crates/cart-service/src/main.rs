//! 购物车服务入口

use std::sync::Arc;

use cart_service::{CartServiceState, DEFAULT_PORT, SERVICE_NAME};
use shop_shared::{config::AppConfig, observability, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(SERVICE_NAME, DEFAULT_PORT)?;
    let telemetry = observability::init(&config)?;

    let mut app = cart_service::app(Arc::new(CartServiceState::new()));
    if let Some(handle) = telemetry.metrics_handle() {
        app = app.merge(observability::metrics::metrics_routes(handle.clone()));
    }

    server::serve(&config, app).await
}
