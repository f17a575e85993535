//! 订单内存存储
//!
//! 订单序列和 ID 计数器放在同一把互斥锁下，分配 ID 与追加订单是一个原子步骤：
//! ID 唯一、严格递增且不复用。

use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::models::{CreateOrderRequest, Order};

/// 订单账本内部状态
#[derive(Debug)]
struct Ledger {
    next_id: i64,
    orders: Vec<Order>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            next_id: 1,
            orders: Vec::new(),
        }
    }
}

/// 只追加的订单存储
///
/// 克隆后共享同一份底层数据。
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    ledger: Arc<Mutex<Ledger>>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配下一个 ID 并追加订单，返回新订单
    pub fn create(&self, req: CreateOrderRequest) -> Order {
        let now = Utc::now();
        let mut ledger = self.ledger.lock();

        let id = ledger.next_id;
        ledger.next_id += 1;

        let order = Order::confirmed(id, req, now);
        ledger.orders.push(order.clone());
        order
    }

    /// 按 ID 查找订单
    pub fn get(&self, id: i64) -> Option<Order> {
        self.ledger.lock().orders.iter().find(|o| o.id == id).cloned()
    }

    /// 按用户筛选订单，保持创建顺序
    pub fn list_by_user(&self, user_id: &str) -> Vec<Order> {
        self.ledger
            .lock()
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect()
    }

    /// 订单总数
    pub fn count(&self) -> usize {
        self.ledger.lock().orders.len()
    }
}
