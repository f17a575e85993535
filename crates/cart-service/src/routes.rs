//! 购物车 REST API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use shop_shared::{HealthResponse, ShopError, observability::metrics};
use tracing::info;

use crate::SERVICE_NAME;
use crate::models::Cart;
use crate::store::CartStore;

/// 购物车服务状态
///
/// 持有购物车存储的共享引用，供所有路由处理器使用
#[derive(Debug, Clone, Default)]
pub struct CartServiceState {
    pub carts: CartStore,
}

impl CartServiceState {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// 请求/响应 DTO
// ============================================================================

/// 加购请求，`quantity` 缺省为 1
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// 加购/移除响应
#[derive(Debug, Serialize, Deserialize)]
pub struct CartMutationResponse {
    pub message: String,
    pub cart: Cart,
}

// ============================================================================
// 路由定义
// ============================================================================

/// 构建购物车服务路由
pub fn cart_routes() -> Router<Arc<CartServiceState>> {
    Router::new()
        .route("/cart/{user_id}", get(get_cart))
        .route("/cart/{user_id}/add", post(add_item))
        .route("/cart/{user_id}/remove/{product_id}", delete(remove_item))
        .route("/health", get(health_check))
}

// ============================================================================
// 路由处理器
// ============================================================================

/// 获取购物车
///
/// GET /cart/{user_id}
async fn get_cart(
    State(state): State<Arc<CartServiceState>>,
    Path(user_id): Path<String>,
) -> Json<Cart> {
    let cart = state.carts.get(&user_id);
    info!(user_id = %user_id, items = cart.items.len(), total = cart.total, "获取购物车");
    Json(cart)
}

/// 加购商品
///
/// POST /cart/{user_id}/add
async fn add_item(
    State(state): State<Arc<CartServiceState>>,
    Path(user_id): Path<String>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<Json<CartMutationResponse>, ShopError> {
    let Json(req) = payload?;

    let cart = state.carts.add_item(&user_id, req.product_id, req.quantity);
    metrics::record_cart_mutation("add");

    info!(
        user_id = %user_id,
        product_id = req.product_id,
        quantity = req.quantity,
        total = cart.total,
        "加购商品"
    );

    Ok(Json(CartMutationResponse {
        message: "Item added to cart".to_string(),
        cart,
    }))
}

/// 移除商品
///
/// DELETE /cart/{user_id}/remove/{product_id}
async fn remove_item(
    State(state): State<Arc<CartServiceState>>,
    path: Result<Path<(String, i64)>, PathRejection>,
) -> Result<Json<CartMutationResponse>, ShopError> {
    let Path((user_id, product_id)) = path?;

    let cart = state.carts.remove_item(&user_id, product_id);
    metrics::record_cart_mutation("remove");

    info!(user_id = %user_id, product_id, total = cart.total, "移除商品");

    Ok(Json(CartMutationResponse {
        message: "Item removed from cart".to_string(),
        cart,
    }))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(SERVICE_NAME))
}

// ============================================================================
// 单元测试
// ============================================================================
