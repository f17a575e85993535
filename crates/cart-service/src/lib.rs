//! 购物车服务
//!
//! 按用户维护内存购物车，支持查询、加购和移除商品。
//!
//! # 主要模块
//!
//! - `models`: 购物车与购物车条目
//! - `store`: 按用户加锁的内存存储
//! - `routes`: REST API

pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use shop_shared::observability::middleware;

pub use models::{Cart, CartItem, UNIT_PRICE};
pub use routes::{CartServiceState, cart_routes};
pub use store::CartStore;

/// 服务名，用于配置加载、日志和健康检查
pub const SERVICE_NAME: &str = "cart-service";

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 5001;

/// 构建带中间件的完整应用
pub fn app(state: Arc<CartServiceState>) -> Router {
    middleware::instrument(cart_routes().with_state(state))
}
