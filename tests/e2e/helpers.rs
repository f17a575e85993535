//! HTTP 客户端辅助

use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// 单个服务的 API 客户端
///
/// 返回状态码和 JSON 响应体，由测试自行断言
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("创建 HTTP 客户端失败");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get(&self, path: &str) -> Result<(StatusCode, Value)> {
        let resp = self.client.get(self.url(path)).send().await?;
        Ok((resp.status(), resp.json().await?))
    }

    pub async fn get_text(&self, path: &str) -> Result<(StatusCode, String)> {
        let resp = self.client.get(self.url(path)).send().await?;
        Ok((resp.status(), resp.text().await?))
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(StatusCode, Value)> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        Ok((resp.status(), resp.json().await?))
    }

    pub async fn delete(&self, path: &str) -> Result<(StatusCode, Value)> {
        let resp = self.client.delete(self.url(path)).send().await?;
        Ok((resp.status(), resp.json().await?))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
