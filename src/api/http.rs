//! Browser HTTP Backend
//!
//! `reqwest` compiles to `fetch` on wasm32. Dropping the returned future
//! aborts the underlying fetch.

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse, HttpBackend, HttpMethod};
use crate::error::ApiResult;

#[derive(Debug, Clone, Default)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, request.url.as_str())
            .bearer_auth(&request.bearer);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}
