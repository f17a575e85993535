//! 订单服务入口

use std::sync::Arc;

use order_service::{DEFAULT_PORT, OrderServiceState, SERVICE_NAME};
use shop_shared::{config::AppConfig, observability, server};
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(SERVICE_NAME, DEFAULT_PORT)?;
    let telemetry = observability::init(&config)?;

    let mut app = order_service::app(Arc::new(OrderServiceState::new()));
    match telemetry.metrics_handle() {
        Some(handle) => {
            app = app.merge(observability::metrics::metrics_routes(handle.clone()));
        }
        None => warn!("指标已禁用，/metrics 不可用"),
    }

    server::serve(&config, app).await
}
