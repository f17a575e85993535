//! 购物车

use futures::future::join_all;
use serde_json::json;

use crate::TestEnvironment;

#[tokio::test]
async fn test_cart_lifecycle() {
    let env = TestEnvironment::start().await.unwrap();

    let (status, body) = env.carts.get("/cart/alice").await.unwrap();
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "user_id": "alice", "items": [], "total": 0 }));

    let (_, body) = env
        .carts
        .post("/cart/alice/add", &json!({ "product_id": 7, "quantity": 2 }))
        .await
        .unwrap();
    assert_eq!(body["cart"]["items"], json!([{ "product_id": 7, "quantity": 2 }]));
    assert_eq!(body["cart"]["total"], 200);

    let (_, body) = env
        .carts
        .post("/cart/alice/add", &json!({ "product_id": 7, "quantity": 3 }))
        .await
        .unwrap();
    assert_eq!(body["cart"]["items"], json!([{ "product_id": 7, "quantity": 5 }]));
    assert_eq!(body["cart"]["total"], 500);

    let (status, body) = env.carts.delete("/cart/alice/remove/7").await.unwrap();
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Item removed from cart");
    assert_eq!(
        body["cart"],
        json!({ "user_id": "alice", "items": [], "total": 0 })
    );
}

#[tokio::test]
async fn test_invalid_add_request_is_rejected() {
    let env = TestEnvironment::start().await.unwrap();

    let (status, body) = env
        .carts
        .post("/cart/alice/add", &json!({ "quantity": 1 }))
        .await
        .unwrap();

    assert_eq!(status, 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_concurrent_adds_are_all_counted() {
    let env = TestEnvironment::start().await.unwrap();

    let requests = (0..20).map(|_| {
        let carts = env.carts.clone();
        async move {
            carts
                .post("/cart/busy/add", &json!({ "product_id": 1 }))
                .await
                .unwrap()
        }
    });
    join_all(requests).await;

    let (_, body) = env.carts.get("/cart/busy").await.unwrap();
    assert_eq!(body["items"], json!([{ "product_id": 1, "quantity": 20 }]));
    assert_eq!(body["total"], 2000);
}
