//! 订单 REST API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use shop_shared::{HealthResponse, ShopError, observability::metrics, path::is_numeric_id};
use tracing::{info, warn};

use crate::SERVICE_NAME;
use crate::models::{CreateOrderRequest, Order};
use crate::store::OrderBook;

/// 订单服务状态
///
/// 持有订单存储的共享引用，供所有路由处理器使用
#[derive(Debug, Clone, Default)]
pub struct OrderServiceState {
    pub orders: OrderBook,
}

impl OrderServiceState {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// 请求/响应 DTO
// ============================================================================

/// 创建订单响应
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order: Order,
}

/// 订单列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub count: usize,
}

/// `/orders/{key}` 的两种含义
///
/// 纯数字按订单 ID 查询，其余按用户 ID 列出订单。
/// 因此纯数字的用户 ID 无法通过该路径列出订单。
/// 超出 `i64` 范围的数字串仍按订单 ID 处理，结果为 `None`（不存在）。
#[derive(Debug, Clone, PartialEq, Eq)]
enum OrderLookup {
    ById(Option<i64>),
    ByUser(String),
}

impl OrderLookup {
    fn parse(key: String) -> Self {
        if is_numeric_id(&key) {
            Self::ById(key.parse().ok())
        } else {
            Self::ByUser(key)
        }
    }
}

// ============================================================================
// 路由定义
// ============================================================================

/// 构建订单服务路由
pub fn order_routes() -> Router<Arc<OrderServiceState>> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/{key}", get(lookup_orders))
        .route("/health", get(health_check))
}

// ============================================================================
// 路由处理器
// ============================================================================

/// 创建订单
///
/// POST /orders
async fn create_order(
    State(state): State<Arc<OrderServiceState>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderCreatedResponse>, ShopError> {
    let Json(req) = payload?;

    let order = state.orders.create(req);
    metrics::record_order_created();

    info!(
        order_id = order.id,
        user_id = %order.user_id,
        total = %order.total,
        "创建订单"
    );

    Ok(Json(OrderCreatedResponse {
        message: "Order created successfully".to_string(),
        order,
    }))
}

/// 查询订单
///
/// GET /orders/{order_id}：订单详情
/// GET /orders/{user_id}：用户的订单列表
async fn lookup_orders(
    State(state): State<Arc<OrderServiceState>>,
    Path(key): Path<String>,
) -> Result<Response, ShopError> {
    match OrderLookup::parse(key) {
        OrderLookup::ById(order_id) => {
            info!(order_id = ?order_id, "获取订单详情");
            let order = order_id
                .and_then(|id| state.orders.get(id))
                .ok_or_else(|| {
                    warn!(order_id = ?order_id, "订单不存在");
                    ShopError::not_found("Order")
                })?;
            Ok(Json(order).into_response())
        }
        OrderLookup::ByUser(user_id) => {
            let orders = state.orders.list_by_user(&user_id);
            let count = orders.len();
            info!(user_id = %user_id, count, "列出用户订单");
            Ok(Json(OrderListResponse { orders, count }).into_response())
        }
    }
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(SERVICE_NAME))
}

// ============================================================================
// 单元测试
// ============================================================================
