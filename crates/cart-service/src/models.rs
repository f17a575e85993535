//! 购物车模型

use serde::{Deserialize, Serialize};

/// 单件商品的固定计价
///
/// 总价不读取商品服务的真实价格，每件一律按 100 计。
pub const UNIT_PRICE: i64 = 100;

/// 购物车条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// 用户购物车
///
/// 不变量：`total == Σ item.quantity * UNIT_PRICE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total: i64,
}

impl Cart {
    /// 空购物车
    pub fn empty(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            items: Vec::new(),
            total: 0,
        }
    }

    /// 加购商品
    ///
    /// 已存在的商品累加数量（不校验数量正负），否则追加到末尾。
    pub fn add_item(&mut self, product_id: i64, quantity: i64) {
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                product_id,
                quantity,
            }),
        }
        self.recompute_total();
    }

    /// 移除商品的所有条目，商品不在购物车中时无变化
    pub fn remove_item(&mut self, product_id: i64) {
        self.items.retain(|item| item.product_id != product_id);
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().fold(0i64, |acc, item| {
            acc.saturating_add(item.quantity.saturating_mul(UNIT_PRICE))
        });
    }
}
