//! 订单模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// 订单状态
///
/// 订单创建即确认，之后不再变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
}

/// 订单
///
/// `items` 与 `total` 原样保存请求中的内容，不做结构校验
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: String,
    pub items: Value,
    pub total: Number,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 创建订单请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub items: Value,
    pub total: Number,
}

impl Order {
    /// 由请求构建已确认的订单
    pub fn confirmed(id: i64, req: CreateOrderRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: req.user_id,
            items: req.items,
            total: req.total,
            status: OrderStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }
}
