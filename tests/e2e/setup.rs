//! 测试环境
//!
//! 每个测试独立启动三个服务，互不共享内存状态。

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

use cart_service::CartServiceState;
use order_service::OrderServiceState;
use product_service::ProductServiceState;
use shop_shared::observability::metrics::metrics_routes;

use crate::helpers::ApiClient;

/// 三个服务的运行实例
pub struct TestEnvironment {
    pub products: ApiClient,
    pub carts: ApiClient,
    pub orders: ApiClient,
}

impl TestEnvironment {
    /// 在 127.0.0.1 的随机端口上启动全部服务
    pub async fn start() -> Result<Self> {
        let products = product_service::app(Arc::new(ProductServiceState::new()));
        let carts = cart_service::app(Arc::new(CartServiceState::new()));
        let orders = order_service::app(Arc::new(OrderServiceState::new()));

        let products = spawn(with_metrics(products)).await?;
        let carts = spawn(with_metrics(carts)).await?;
        let orders = spawn(with_metrics(orders)).await?;

        Ok(Self {
            products: ApiClient::new(&products),
            carts: ApiClient::new(&carts),
            orders: ApiClient::new(&orders),
        })
    }
}

/// 挂载 `/metrics`，不安装全局 recorder，仅验证导出格式
fn with_metrics(app: Router) -> Router {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    app.merge(metrics_routes(handle))
}

async fn spawn(app: Router) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("测试服务退出: {}", e);
        }
    });

    Ok(format!("http://{}", addr))
}
