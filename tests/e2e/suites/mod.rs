//! 测试套件

mod cart;
mod catalog;
mod checkout;
mod health;
