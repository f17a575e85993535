//! 订单服务
//!
//! 维护只追加的内存订单序列，订单 ID 从 1 开始单调递增。

pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use shop_shared::observability::middleware;

pub use models::{CreateOrderRequest, Order, OrderStatus};
pub use routes::{OrderServiceState, order_routes};
pub use store::OrderBook;

/// 服务名，用于配置加载、日志和健康检查
pub const SERVICE_NAME: &str = "order-service";

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 5002;

/// 构建带中间件的完整应用
pub fn app(state: Arc<OrderServiceState>) -> Router {
    middleware::instrument(order_routes().with_state(state))
}
