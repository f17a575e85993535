//! 商品目录服务
//!
//! 提供只读的静态商品目录 REST API。

pub mod catalog;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use shop_shared::observability::middleware;

pub use catalog::{Catalog, Product};
pub use routes::{ProductListResponse, ProductServiceState, product_routes};

/// 服务名，用于配置加载、日志和健康检查
pub const SERVICE_NAME: &str = "product-service";

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 5003;

/// 构建带中间件的完整应用
pub fn app(state: Arc<ProductServiceState>) -> Router {
    middleware::instrument(product_routes().with_state(state))
}
