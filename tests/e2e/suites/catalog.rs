//! 商品目录

use serde_json::json;

use crate::TestEnvironment;

#[tokio::test]
async fn test_list_products() {
    let env = TestEnvironment::start().await.unwrap();

    let (status, body) = env.products.get("/products").await.unwrap();

    assert_eq!(status, 200);
    assert_eq!(body["count"], 4);
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Laptop", "Smartphone", "Headphones", "Desk Chair"]);
}

#[tokio::test]
async fn test_get_product() {
    let env = TestEnvironment::start().await.unwrap();

    let (status, body) = env.products.get("/products/2").await.unwrap();

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "id": 2,
            "name": "Smartphone",
            "price": 699.99,
            "category": "Electronics",
            "stock": 30
        })
    );
}

#[tokio::test]
async fn test_get_missing_product() {
    let env = TestEnvironment::start().await.unwrap();

    let (status, body) = env.products.get("/products/999").await.unwrap();

    assert_eq!(status, 404);
    assert_eq!(body, json!({ "error": "Product not found" }));
}
