//! 购物车内存存储
//!
//! 基于 DashMap 按用户分片加锁。每次变更都在持有该用户购物车锁的情况下
//! 完成读取、修改和重算总价，并发加购同一用户不会丢失更新。

use dashmap::DashMap;
use std::sync::Arc;

use crate::models::Cart;

/// 按用户 ID 索引的购物车存储
///
/// 克隆后共享同一份底层数据。
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    carts: Arc<DashMap<String, Cart>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取购物车快照
    ///
    /// 用户没有购物车时返回空购物车，但不写入存储
    pub fn get(&self, user_id: &str) -> Cart {
        self.carts
            .get(user_id)
            .map(|cart| cart.clone())
            .unwrap_or_else(|| Cart::empty(user_id))
    }

    /// 加购商品，必要时先创建购物车，返回更新后的快照
    pub fn add_item(&self, user_id: &str, product_id: i64, quantity: i64) -> Cart {
        let mut cart = self
            .carts
            .entry(user_id.to_string())
            .or_insert_with(|| Cart::empty(user_id));
        cart.add_item(product_id, quantity);
        cart.clone()
    }

    /// 移除商品，返回更新后的快照
    ///
    /// 用户没有购物车时不创建，直接返回空购物车
    pub fn remove_item(&self, user_id: &str, product_id: i64) -> Cart {
        match self.carts.get_mut(user_id) {
            Some(mut cart) => {
                cart.remove_item(product_id);
                cart.clone()
            }
            None => Cart::empty(user_id),
        }
    }

    /// 已创建的购物车数量
    pub fn count(&self) -> usize {
        self.carts.len()
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.carts.contains_key(user_id)
    }
}
