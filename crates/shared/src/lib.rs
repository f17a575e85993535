//! 共享库
//!
//! 包含商品、购物车、订单三个服务共用的配置、错误处理、可观测性和服务启动代码。

pub mod config;
pub mod error;
pub mod health;
pub mod observability;
pub mod path;
pub mod server;

pub use error::{Result, ShopError};
pub use health::HealthResponse;
