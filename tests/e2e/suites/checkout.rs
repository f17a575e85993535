//! 目录 -> 购物车 -> 订单的完整下单流程
//!
//! 三个服务互不调用，由调用方串联。

use serde_json::json;

use crate::TestEnvironment;

#[tokio::test]
async fn test_checkout_flow() {
    let env = TestEnvironment::start().await.unwrap();
    let user = "eve";

    // 从目录中挑选商品
    let (_, catalog) = env.products.get("/products").await.unwrap();
    let laptop = &catalog["products"][0];
    let headphones = &catalog["products"][2];

    env.carts
        .post(
            &format!("/cart/{}/add", user),
            &json!({ "product_id": laptop["id"], "quantity": 1 }),
        )
        .await
        .unwrap();
    let (_, added) = env
        .carts
        .post(
            &format!("/cart/{}/add", user),
            &json!({ "product_id": headphones["id"], "quantity": 2 }),
        )
        .await
        .unwrap();

    // 购物车总价按固定单价计算，与商品真实价格无关
    let cart = &added["cart"];
    assert_eq!(cart["total"], 300);

    // 用调用方按真实价格计算的金额下单
    let real_total = laptop["price"].as_f64().unwrap() + 2.0 * headphones["price"].as_f64().unwrap();
    let (status, created) = env
        .orders
        .post(
            "/orders",
            &json!({ "user_id": user, "items": cart["items"], "total": real_total }),
        )
        .await
        .unwrap();
    assert_eq!(status, 200);

    let order = &created["order"];
    assert_eq!(order["user_id"], user);
    assert_eq!(order["items"], cart["items"]);
    assert_eq!(order["total"].as_f64(), Some(real_total));
    assert_eq!(order["status"], "confirmed");

    let (_, listing) = env.orders.get(&format!("/orders/{}", user)).await.unwrap();
    assert_eq!(listing["count"], 1);
}
