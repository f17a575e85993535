//! 商品目录 REST API
//!
//! 目录只读，处理器不修改任何状态。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use shop_shared::{HealthResponse, ShopError, path::parse_numeric_id};
use tracing::{info, warn};

use crate::SERVICE_NAME;
use crate::catalog::{Catalog, Product};

/// 商品服务状态
#[derive(Debug, Clone)]
pub struct ProductServiceState {
    pub catalog: Catalog,
}

impl ProductServiceState {
    /// 使用内置商品目录创建服务状态
    pub fn new() -> Self {
        Self::with_catalog(Catalog::seeded())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl Default for ProductServiceState {
    fn default() -> Self {
        Self::new()
    }
}

/// 商品列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub count: usize,
}

/// 构建商品服务路由
pub fn product_routes() -> Router<Arc<ProductServiceState>> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{product_id}", get(get_product))
        .route("/health", get(health_check))
}

/// 列出全部商品
///
/// GET /products
async fn list_products(State(state): State<Arc<ProductServiceState>>) -> Json<ProductListResponse> {
    let products = state.catalog.list().to_vec();
    let count = products.len();

    info!(count, "列出商品");

    Json(ProductListResponse { products, count })
}

/// 获取商品详情
///
/// GET /products/{product_id}，非数字 id 视为不存在
async fn get_product(
    State(state): State<Arc<ProductServiceState>>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ShopError> {
    info!(product_id = %product_id, "获取商品详情");

    parse_numeric_id(&product_id)
        .and_then(|id| state.catalog.get(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            warn!(product_id = %product_id, "商品不存在");
            ShopError::not_found("Product")
        })
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(SERVICE_NAME))
}
