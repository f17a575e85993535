//! 商城服务端到端测试
//!
//! 在本地随机端口上启动商品、购物车、订单三个服务，通过真实 HTTP 调用覆盖：
//! - 商品目录查询
//! - 购物车加购/移除
//! - 订单创建与查询
//! - 目录 -> 购物车 -> 订单的完整下单流程

pub mod helpers;
pub mod setup;
pub mod suites;

pub use setup::TestEnvironment;
