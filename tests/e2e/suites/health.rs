//! 存活探针与横切行为

use serde_json::json;

use crate::TestEnvironment;

#[tokio::test]
async fn test_each_service_reports_healthy() {
    let env = TestEnvironment::start().await.unwrap();

    for (client, name) in [
        (&env.products, "product-service"),
        (&env.carts, "cart-service"),
        (&env.orders, "order-service"),
    ] {
        let (status, body) = client.get("/health").await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "status": "healthy", "service": name }));
    }
}

#[tokio::test]
async fn test_each_service_exposes_metrics() {
    let env = TestEnvironment::start().await.unwrap();

    for client in [&env.products, &env.carts, &env.orders] {
        let (status, _body) = client.get_text("/metrics").await.unwrap();
        assert_eq!(status, 200);
    }
}
