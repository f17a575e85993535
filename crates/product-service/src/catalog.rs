//! 静态商品目录
//!
//! 目录在启动时构建，进程生命周期内不可变，多个请求通过 `Arc` 共享同一份数据。

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
}

impl Product {
    fn new(id: i64, name: &str, price: f64, category: &str, stock: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            stock,
        }
    }
}

/// 只读商品目录
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// 内置的默认商品
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "Laptop", 999.99, "Electronics", 15),
            Product::new(2, "Smartphone", 699.99, "Electronics", 30),
            Product::new(3, "Headphones", 149.99, "Electronics", 50),
            Product::new(4, "Desk Chair", 199.99, "Furniture", 10),
        ])
    }

    /// 全部商品，保持定义顺序
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// 按 id 线性查找
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
